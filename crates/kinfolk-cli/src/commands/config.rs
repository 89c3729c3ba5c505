//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
pub fn execute_config(args: ConfigArgs, config: &Config, path: &Path, formatter: &Formatter) -> Result<()> {
    match args.action {
        ConfigAction::Init { force } => println!("{}", init_config(path, force, formatter)?),
        ConfigAction::Show => println!("{}", formatter.format_config(config, path)?),
    }
    Ok(())
}

/// Write a default configuration to `path`, refusing to clobber unless forced.
pub fn init_config(path: &Path, force: bool, formatter: &Formatter) -> Result<String> {
    if path.exists() && !force {
        return Err(CliError::InvalidInput(format!(
            "{} already exists; use --force to overwrite",
            path.display()
        )));
    }

    Config::default().save_to(path)?;
    tracing::debug!(path = %path.display(), "Wrote default configuration");
    Ok(formatter.success(&format!("Wrote {}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".kinfolk").join("config.toml");
        let formatter = Formatter::new(OutputFormat::Table, false);

        let message = init_config(&path, false, &formatter).unwrap();
        assert_eq!(message, format!("✓ Wrote {}", path.display()));

        let loaded = Config::load_from(&path).unwrap();
        assert!(loaded.settings.color);
        assert_eq!(loaded.tree.viewer_label, "self");
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[settings]\ncolor = false\n").unwrap();
        let formatter = Formatter::new(OutputFormat::Table, false);

        assert!(matches!(
            init_config(&path, false, &formatter),
            Err(CliError::InvalidInput(_))
        ));
        assert!(!Config::load_from(&path).unwrap().settings.color);

        init_config(&path, true, &formatter).unwrap();
        assert!(Config::load_from(&path).unwrap().settings.color);
    }
}
