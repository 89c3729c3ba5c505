//! Catalog command implementation.

use crate::error::Result;
use crate::output::Formatter;
use kinfolk_domain::{Gender, RelationType};
use serde::Serialize;

/// One row of the relation vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Wire code
    pub code: String,

    /// Neutral code of the family
    pub family: String,

    /// `M`, `F`, or `-` for neutral codes
    pub gender: String,

    /// Code the other party uses for the same edge
    pub inverse: String,

    /// Band level, `None` when unplaced
    pub level: Option<i32>,

    /// Generation offset, `None` when unplaced
    pub generation: Option<i32>,
}

impl From<RelationType> for CatalogEntry {
    fn from(relation: RelationType) -> Self {
        let placement = relation.placement();
        let gender = match relation.gender() {
            Gender::Unknown => "-".to_string(),
            known => known.as_str().to_string(),
        };

        Self {
            code: relation.as_str().to_string(),
            family: relation.family().neutral().as_str().to_string(),
            gender,
            inverse: relation.inverse().as_str().to_string(),
            level: placement.map(|p| p.level),
            generation: placement.map(|p| p.generation),
        }
    }
}

/// Every catalog code in vocabulary order.
pub fn catalog_entries() -> Vec<CatalogEntry> {
    RelationType::ALL.iter().copied().map(CatalogEntry::from).collect()
}

/// Execute the catalog command.
pub fn execute_catalog(formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_catalog(&catalog_entries())?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_entries_cover_vocabulary() {
        let entries = catalog_entries();
        assert_eq!(entries.len(), RelationType::ALL.len());

        let niece = entries.iter().find(|e| e.code == "niece").unwrap();
        assert_eq!(niece.family, "sibling_child");
        assert_eq!(niece.gender, "F");
        assert_eq!(niece.inverse, "parent_sibling");
        assert_eq!((niece.level, niece.generation), (Some(3), Some(1)));

        let friend = entries.iter().find(|e| e.code == "friend").unwrap();
        assert_eq!(friend.gender, "-");
        assert_eq!(friend.level, None);
    }

    #[test]
    fn test_catalog_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_catalog(&catalog_entries()).unwrap();
        assert!(output.contains("Generation"));
        assert!(output.contains("half_sister"));
    }

    #[test]
    fn test_catalog_quiet() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_catalog(&catalog_entries()).unwrap();
        assert_eq!(output.lines().count(), 29);
        assert_eq!(output.lines().next(), Some("parent"));
    }
}
