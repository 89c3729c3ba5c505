//! Label command implementation.

use crate::cli::LabelArgs;
use crate::error::Result;
use crate::output::Formatter;
use kinfolk_domain::{Gender, RelationCode};
use serde::Serialize;

/// Result of a single catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelLookup {
    /// Code as given
    pub code: String,

    /// Resolved label
    pub label: String,

    /// Whether the code is in the catalog
    pub known: bool,
}

/// Execute the label command.
pub fn execute_label(args: LabelArgs, formatter: &Formatter) -> Result<()> {
    let gender = args.gender.map(Gender::from).unwrap_or_default();
    let lookup = lookup(&args.code, gender, args.inverse);
    println!("{}", formatter.format_lookup(&lookup)?);
    Ok(())
}

/// Resolve `code`, optionally through its inverse, for a party of `gender`.
pub fn lookup(code: &str, gender: Gender, inverse: bool) -> LabelLookup {
    let parsed = RelationCode::parse(code);
    let known = !parsed.is_unmapped();

    let base = if inverse { parsed.inverse() } else { parsed };
    let label = base.adapt(gender).to_string();

    LabelLookup {
        code: code.to_string(),
        label,
        known,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_lookup() {
        assert_eq!(lookup("parent", Gender::Female, false).label, "mother");
        assert_eq!(lookup("father", Gender::Female, false).label, "father");
        assert_eq!(lookup("cousin", Gender::Male, false).label, "cousin");
    }

    #[test]
    fn test_inverse_lookup() {
        assert_eq!(lookup("son", Gender::Female, true).label, "mother");
        assert_eq!(lookup("wife", Gender::Unknown, true).label, "husband");
        assert_eq!(lookup("aunt", Gender::Unknown, true).label, "sibling_child");
    }

    #[test]
    fn test_unmapped_code_passes_through() {
        let result = lookup("godmother", Gender::Male, true);
        assert_eq!(result.label, "godmother");
        assert!(!result.known);
    }
}
