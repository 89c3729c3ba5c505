//! Gender module - drives relation label adaptation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender of a person as far as relation wording is concerned
///
/// Stored profiles use `M` / `F`; anything else (including a missing value)
/// is treated as unknown, which keeps labels gender-neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Gender {
    /// Male (`M`)
    Male,

    /// Female (`F`)
    Female,

    /// Not recorded or not recognized
    #[default]
    Unknown,
}

impl Gender {
    /// Get the stored code for this gender
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
            Gender::Unknown => "",
        }
    }

    /// Parse a gender code, returning `None` for anything unrecognized
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" => Some(Gender::Male),
            "f" | "female" => Some(Gender::Female),
            "" | "u" | "unknown" => Some(Gender::Unknown),
            _ => None,
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid gender: {}", s))
    }
}

impl From<String> for Gender {
    fn from(value: String) -> Self {
        Self::parse(&value).unwrap_or_default()
    }
}

impl From<Gender> for String {
    fn from(value: Gender) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Unknown => write!(f, "?"),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_parsing() {
        assert_eq!(Gender::parse("M"), Some(Gender::Male));
        assert_eq!(Gender::parse("female"), Some(Gender::Female));
        assert_eq!(Gender::parse(""), Some(Gender::Unknown));
        assert_eq!(Gender::parse("x"), None);
        assert!("x".parse::<Gender>().is_err());
    }

    #[test]
    fn test_lenient_deserialization() {
        let g: Gender = serde_json::from_str("\"F\"").unwrap();
        assert_eq!(g, Gender::Female);

        // Unrecognized stored values fall back to unknown
        let g: Gender = serde_json::from_str("\"nonbinary\"").unwrap();
        assert_eq!(g, Gender::Unknown);
    }

    #[test]
    fn test_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"M\"");
    }
}
