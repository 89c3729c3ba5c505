//! Loading assertion and profile files.

use crate::error::{CliError, Result};
use kinfolk_domain::{PersonId, PersonProfile, RelationAssertion};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Profiles keyed by person id.
pub type Profiles = HashMap<PersonId, PersonProfile>;

/// Read a JSON array of relation assertions.
pub fn load_assertions<P: AsRef<Path>>(path: P) -> Result<Vec<RelationAssertion>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let assertions = parse_assertions(&contents)?;
    tracing::debug!(path = %path.display(), count = assertions.len(), "Loaded assertions");
    Ok(assertions)
}

/// Parse a JSON array of relation assertions.
pub fn parse_assertions(contents: &str) -> Result<Vec<RelationAssertion>> {
    let assertions: Vec<RelationAssertion> = serde_json::from_str(contents)?;

    if let Some(bad) = assertions
        .iter()
        .find(|a| a.subject_id.as_str().is_empty() || a.object_id.as_str().is_empty())
    {
        return Err(CliError::InvalidInput(format!(
            "Assertion '{}' has an empty person id",
            bad.id
        )));
    }

    Ok(assertions)
}

/// Read a JSON object mapping person ids to profiles; no file means no profiles.
pub fn load_profiles<P: AsRef<Path>>(path: Option<P>) -> Result<Profiles> {
    let Some(path) = path else {
        return Ok(Profiles::new());
    };
    let contents = fs::read_to_string(path.as_ref())?;
    let profiles: Profiles = serde_json::from_str(&contents)?;
    tracing::debug!(path = %path.as_ref().display(), count = profiles.len(), "Loaded profiles");
    Ok(profiles)
}

/// Validate a viewer id given on the command line.
pub fn viewer_id(raw: &str) -> Result<PersonId> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CliError::InvalidInput("Viewer id cannot be empty".to_string()));
    }
    Ok(PersonId::new(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinfolk_domain::{AssertionStatus, Gender};
    use tempfile::TempDir;

    #[test]
    fn test_parse_assertions_with_defaults_and_aliases() {
        let json = r#"[
            {"id": "a1", "subject_id": "U", "object_id": "P1", "relation_code": "father"},
            {"id": "a2", "subject_id": "U", "object_id": "S1", "relation_type_code": "wife", "status": "pending"}
        ]"#;
        let assertions = parse_assertions(json).unwrap();

        assert_eq!(assertions.len(), 2);
        assert_eq!(assertions[0].status, AssertionStatus::Accepted);
        assert_eq!(assertions[1].relation_code, "wife");
        assert_eq!(assertions[1].status, AssertionStatus::Pending);
    }

    #[test]
    fn test_empty_person_id_is_rejected() {
        let json = r#"[{"id": "a1", "subject_id": "", "object_id": "P1", "relation_code": "father"}]"#;
        assert!(matches!(parse_assertions(json), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(parse_assertions("{not json"), Err(CliError::Serialization(_))));
    }

    #[test]
    fn test_load_profiles() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profiles.json");
        fs::write(
            &path,
            r#"{"U": {"display_name": "Ulf", "gender": "M"}, "S1": {"gender": "female"}}"#,
        )
        .unwrap();

        let profiles = load_profiles(Some(&path)).unwrap();
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[&PersonId::new("U")].display_name, "Ulf");
        assert_eq!(profiles[&PersonId::new("S1")].gender, Gender::Female);
        assert!(profiles[&PersonId::new("S1")].display_name.is_empty());
    }

    #[test]
    fn test_no_profiles_file() {
        let profiles = load_profiles(None::<&Path>).unwrap();
        assert!(profiles.is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            load_assertions(dir.path().join("absent.json")),
            Err(CliError::Io(_))
        ));
    }

    #[test]
    fn test_viewer_id() {
        assert_eq!(viewer_id(" U ").unwrap(), PersonId::new("U"));
        assert!(viewer_id("  ").is_err());
    }
}
