//! Counters collected while building a tree

use serde::Serialize;

/// What happened to the input during one build
///
/// Every assertion handed to the builder lands in exactly one of the
/// `skipped_*` buckets or in `linked`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildStats {
    /// Assertions handed to the builder
    pub assertions: usize,

    /// Skipped because their status was not accepted
    pub skipped_status: usize,

    /// Skipped because the viewer was not a party
    pub skipped_unrelated: usize,

    /// Skipped because subject and object were the same person
    pub skipped_self_reference: usize,

    /// Assertions that reached the linker
    pub linked: usize,

    /// Linked assertions whose code is not in the catalog
    pub unmapped_codes: usize,

    /// Parent/child edges added
    pub edges_added: usize,

    /// Linked assertions that produced no structural edge
    pub unattached: usize,

    /// Placeholder nodes synthesized
    pub placeholders: usize,
}

impl BuildStats {
    /// Create empty stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Total assertions skipped before linking
    pub fn total_skipped(&self) -> usize {
        self.skipped_status + self.skipped_unrelated + self.skipped_self_reference
    }

    /// Generate a summary report
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Tree Build Summary".to_string(),
            "==================".to_string(),
            format!("Assertions: {}", self.assertions),
            format!("Linked: {}", self.linked),
            format!("Edges added: {}", self.edges_added),
            format!("Placeholders: {}", self.placeholders),
        ];

        if self.total_skipped() > 0 {
            lines.push(String::new());
            lines.push("Skipped:".to_string());
            lines.push(format!("  Not accepted: {}", self.skipped_status));
            lines.push(format!("  Viewer not a party: {}", self.skipped_unrelated));
            lines.push(format!("  Self reference: {}", self.skipped_self_reference));
        }

        if self.unmapped_codes > 0 || self.unattached > 0 {
            lines.push(String::new());
            lines.push(format!("Unmapped codes: {}", self.unmapped_codes));
            lines.push(format!("Unattached: {}", self.unattached));
        }

        lines.join("\n")
    }
}
