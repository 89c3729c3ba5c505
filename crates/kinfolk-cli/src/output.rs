//! Output formatting for the CLI.

use crate::commands::catalog::CatalogEntry;
use crate::commands::label::LabelLookup;
use crate::config::{Config, OutputFormat};
use crate::error::{CliError, Result};
use colored::*;
use kinfolk_tree::{BuildStats, FamilyTree, NodeKind, RelationLabel, TreeNode};
use std::path::Path;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a built family tree.
    pub fn format_tree(&self, tree: &FamilyTree) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&tree.to_forest())?),
            OutputFormat::Table => Ok(self.format_tree_text(tree)),
            OutputFormat::Quiet => Ok(tree
                .flatten()
                .iter()
                .map(|node| node.id.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Indented rendering, one root per block, detached nodes listed last.
    fn format_tree_text(&self, tree: &FamilyTree) -> String {
        let mut lines = Vec::new();

        for root in tree.to_forest() {
            lines.push(self.node_line(&root));
            self.push_children(&root, "", &mut lines);
        }

        let detached = tree.detached();
        if !detached.is_empty() {
            lines.push(String::new());
            lines.push(self.colorize("Not connected:", "yellow"));
            for node in detached {
                let name = if node.display_name.is_empty() {
                    node.id.to_string()
                } else {
                    node.display_name.clone()
                };
                lines.push(format!("  {} ({})", name, node.relation_label));
            }
        }

        lines.join("\n")
    }

    fn push_children(&self, node: &TreeNode, prefix: &str, lines: &mut Vec<String>) {
        let count = node.children.len();
        for (i, child) in node.children.iter().enumerate() {
            let last = i + 1 == count;
            let connector = if last { "└── " } else { "├── " };
            lines.push(format!("{}{}{}", prefix, connector, self.node_line(child)));

            let next = format!("{}{}", prefix, if last { "    " } else { "│   " });
            self.push_children(child, &next, lines);
        }
    }

    fn node_line(&self, node: &TreeNode) -> String {
        let name = if node.display_name.is_empty() {
            node.id.to_string()
        } else {
            format!("{} [{}]", node.display_name, node.id)
        };
        let text = format!("{} ({})", name, node.relation_label);

        match node.kind {
            NodeKind::Viewer => self.colorize(&text, "green"),
            NodeKind::Placeholder => self.colorize(&text, "magenta"),
            NodeKind::Relative => text,
        }
    }

    /// Format viewer-relative relation labels.
    pub fn format_labels(&self, labels: &[RelationLabel]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(labels)?),
            OutputFormat::Quiet => Ok(labels
                .iter()
                .map(|l| l.person_id.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if labels.is_empty() {
                    return Ok(self.colorize("No relations found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Assertion", "Person", "Relation", "Status"]);
                for label in labels {
                    builder.push_record([
                        label.assertion_id.as_str(),
                        label.person_id.as_str(),
                        label.label.as_str(),
                        label.status.as_str(),
                    ]);
                }
                Ok(self.render(builder))
            }
        }
    }

    /// Format the relation vocabulary.
    pub fn format_catalog(&self, entries: &[CatalogEntry]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(entries)?),
            OutputFormat::Quiet => Ok(entries
                .iter()
                .map(|e| e.code.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Code", "Family", "Gender", "Inverse", "Level", "Generation"]);
                for entry in entries {
                    builder.push_record([
                        entry.code.clone(),
                        entry.family.clone(),
                        entry.gender.clone(),
                        entry.inverse.clone(),
                        optional(entry.level),
                        optional(entry.generation),
                    ]);
                }
                Ok(self.render(builder))
            }
        }
    }

    /// Format a single code lookup.
    pub fn format_lookup(&self, lookup: &LabelLookup) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(lookup)?),
            OutputFormat::Quiet => Ok(lookup.label.clone()),
            OutputFormat::Table => {
                let mut text = format!("{} → {}", lookup.code, self.colorize(&lookup.label, "cyan"));
                if !lookup.known {
                    text.push('\n');
                    text.push_str(&self.warning(&format!("'{}' is not in the catalog", lookup.code)));
                }
                Ok(text)
            }
        }
    }

    /// Format the effective configuration; quiet mode prints only its path.
    pub fn format_config(&self, config: &Config, path: &Path) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(config)?),
            OutputFormat::Quiet => Ok(path.display().to_string()),
            OutputFormat::Table => {
                let body = toml::to_string_pretty(config)
                    .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
                Ok(format!("{}\n\n{}", self.colorize(&format!("# {}", path.display()), "cyan"), body.trim_end()))
            }
        }
    }

    /// Format build statistics.
    pub fn format_stats(&self, stats: &BuildStats) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(stats)?),
            OutputFormat::Quiet => Ok(String::new()),
            OutputFormat::Table => Ok(stats.summary()),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

fn optional(value: Option<i32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}
