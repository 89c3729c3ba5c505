//! Kinfolk CLI library.
//!
//! Configuration, input loading, command execution and output formatting for
//! the `kinfolk` command-line front end.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
