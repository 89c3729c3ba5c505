//! CLI command definitions and argument parsing.

use clap::{ArgAction, Args, Parser, Subcommand};
use kinfolk_domain::Gender;
use std::path::PathBuf;

/// Kinfolk CLI - Build viewer-centred family trees from relation assertions.
#[derive(Debug, Parser)]
#[command(name = "kinfolk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "KINFOLK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build the family tree for a viewer
    Tree(TreeArgs),

    /// List every relation of a viewer with its viewer-relative label
    List(ListArgs),

    /// Look up a relation code in the catalog
    Label(LabelArgs),

    /// Print the relation vocabulary
    Catalog,

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Input files shared by the tree and list commands.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// JSON file holding an array of relation assertions
    #[arg(short, long)]
    pub assertions: PathBuf,

    /// Person id the tree is built around
    #[arg(short = 'u', long)]
    pub viewer: String,

    /// JSON file mapping person ids to profiles
    #[arg(short, long)]
    pub profiles: Option<PathBuf>,
}

/// Arguments for the tree command.
#[derive(Debug, Parser)]
pub struct TreeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Never synthesize placeholder parents or children
    #[arg(long)]
    pub strict: bool,

    /// Print build statistics after the tree
    #[arg(long)]
    pub stats: bool,
}

/// Arguments for the list command.
#[derive(Debug, Parser)]
pub struct ListArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Only show accepted assertions
    #[arg(long)]
    pub accepted_only: bool,
}

/// Arguments for the label command.
#[derive(Debug, Parser)]
pub struct LabelArgs {
    /// Relation code (e.g. father, half_sister)
    #[arg(long)]
    pub code: String,

    /// Gender of the person the label describes
    #[arg(short, long, value_enum)]
    pub gender: Option<GenderArg>,

    /// Look up the inverse relation first
    #[arg(short, long)]
    pub inverse: bool,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Write a configuration file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show the effective configuration
    Show,
}

/// Gender argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum GenderArg {
    /// Male
    #[value(alias = "m", alias = "M")]
    Male,
    /// Female
    #[value(alias = "f", alias = "F")]
    Female,
    /// Unknown
    #[value(alias = "u")]
    Unknown,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<GenderArg> for Gender {
    fn from(gender: GenderArg) -> Self {
        match gender {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
            GenderArg::Unknown => Gender::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_command() {
        let cli = Cli::parse_from([
            "kinfolk",
            "tree",
            "--assertions",
            "family.json",
            "--viewer",
            "U",
            "--stats",
        ]);
        match cli.command {
            Command::Tree(args) => {
                assert_eq!(args.input.viewer, "U");
                assert_eq!(args.input.assertions, PathBuf::from("family.json"));
                assert!(args.input.profiles.is_none());
                assert!(args.stats);
                assert!(!args.strict);
            }
            _ => panic!("Expected Tree command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["kinfolk", "catalog", "--format", "json", "-vv", "--no-color"]);
        assert!(matches!(cli.command, Command::Catalog));
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_color);
    }

    #[test]
    fn test_label_command_with_gender_alias() {
        let cli = Cli::parse_from(["kinfolk", "label", "--code", "son", "--gender", "F", "--inverse"]);
        match cli.command {
            Command::Label(args) => {
                assert_eq!(args.code, "son");
                assert!(args.inverse);
                assert_eq!(args.gender.map(Gender::from), Some(Gender::Female));
            }
            _ => panic!("Expected Label command"),
        }
    }

    #[test]
    fn test_config_init_command() {
        let cli = Cli::parse_from(["kinfolk", "config", "init", "--force", "--config", "/tmp/k.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/k.toml")));
        match cli.command {
            Command::Config(args) => assert!(matches!(args.action, ConfigAction::Init { force: true })),
            _ => panic!("Expected Config command"),
        }
    }

    #[test]
    fn test_missing_viewer_is_rejected() {
        let result = Cli::try_parse_from(["kinfolk", "list", "--assertions", "family.json"]);
        assert!(result.is_err());
    }
}
