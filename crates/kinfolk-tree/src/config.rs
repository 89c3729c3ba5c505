//! Configuration for tree building
//!
//! Controls the labels given to synthetic nodes and which optional linking
//! steps run.

use crate::TreeError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the tree builder
///
/// # Examples
///
/// ```
/// use kinfolk_tree::TreeConfig;
///
/// let config = TreeConfig::default();
/// assert_eq!(config.viewer_label, "self");
/// assert!(config.synthesize_placeholders);
///
/// // No synthetic nodes at all
/// let config = TreeConfig::strict();
/// assert!(!config.synthesize_placeholders);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Label given to the viewer's own node
    /// Default: "self"
    #[serde(default = "default_viewer_label")]
    pub viewer_label: String,

    /// Label given to a synthesized parent (implied by a grandparent)
    /// Default: "parent"
    #[serde(default = "default_placeholder_parent_label")]
    pub placeholder_parent_label: String,

    /// Label given to a synthesized child (implied by a grandchild)
    /// Default: "child"
    #[serde(default = "default_placeholder_child_label")]
    pub placeholder_child_label: String,

    /// Create placeholder nodes for implied intermediate relatives
    /// Default: true
    #[serde(default = "default_true")]
    pub synthesize_placeholders: bool,
}

fn default_viewer_label() -> String {
    "self".to_string()
}

fn default_placeholder_parent_label() -> String {
    "parent".to_string()
}

fn default_placeholder_child_label() -> String {
    "child".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            viewer_label: default_viewer_label(),
            placeholder_parent_label: default_placeholder_parent_label(),
            placeholder_child_label: default_placeholder_child_label(),
            synthesize_placeholders: true,
        }
    }
}

impl TreeConfig {
    /// Configuration that never invents nodes
    ///
    /// Grandparents and grandchildren without a recorded intermediate
    /// relative stay unattached instead of hanging off a placeholder.
    pub fn strict() -> Self {
        Self {
            synthesize_placeholders: false,
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TreeError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, TreeError> {
        let config: TreeConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every label is usable
    pub fn validate(&self) -> Result<(), TreeError> {
        let labels = [
            ("viewer_label", &self.viewer_label),
            ("placeholder_parent_label", &self.placeholder_parent_label),
            ("placeholder_child_label", &self.placeholder_child_label),
        ];

        for (name, value) in labels {
            if value.trim().is_empty() {
                return Err(TreeError::Config(format!("{} cannot be empty", name)));
            }
        }

        Ok(())
    }
}
