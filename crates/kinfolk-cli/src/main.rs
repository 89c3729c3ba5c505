//! Kinfolk CLI - Build viewer-centred family trees from relation assertions.

use clap::Parser;
use kinfolk_cli::commands;
use kinfolk_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> kinfolk_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Explicit path first, then ~/.kinfolk/config.toml
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::path()?,
    };
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        // A broken file must not block `config init --force`
        Err(e) if matches!(cli.command, Command::Config(_)) => {
            eprintln!("Warning: ignoring {}: {}", config_path.display(), e);
            Config::default()
        }
        Err(e) => return Err(e),
    };

    init_logging(cli.verbose, &config.settings.log_level);

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Tree(args) => commands::execute_tree(args, &config.tree, &formatter)?,
        Command::List(args) => commands::execute_list(args, &formatter)?,
        Command::Label(args) => commands::execute_label(args, &formatter)?,
        Command::Catalog => commands::execute_catalog(&formatter)?,
        Command::Config(args) => commands::execute_config(args, &config, &config_path, &formatter)?,
    }

    Ok(())
}

/// Log to stderr; `-v` wins, then `RUST_LOG`, then the configured level.
fn init_logging(verbose: u8, configured: &str) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured)),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
