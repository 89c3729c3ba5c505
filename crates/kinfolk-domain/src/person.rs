//! Person profile data consumed by the node factory

use crate::Gender;
use serde::{Deserialize, Serialize};

/// Display data and gender for one person
///
/// Every field is optional on the wire; a missing profile or a missing
/// field yields empty display data rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PersonProfile {
    /// Name shown on the node
    #[serde(default)]
    pub display_name: String,

    /// Reference to an avatar image (URL or storage key)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_ref: Option<String>,

    /// Gender used for label adaptation
    #[serde(default)]
    pub gender: Gender,
}

impl PersonProfile {
    /// Create a profile with a display name and gender
    pub fn new(display_name: impl Into<String>, gender: Gender) -> Self {
        Self {
            display_name: display_name.into(),
            avatar_ref: None,
            gender,
        }
    }

    /// Attach an avatar reference
    pub fn with_avatar(mut self, avatar_ref: impl Into<String>) -> Self {
        self.avatar_ref = Some(avatar_ref.into());
        self
    }
}
