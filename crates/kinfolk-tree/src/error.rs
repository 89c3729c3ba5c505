//! Error types for tree configuration
//!
//! Building a tree never fails; degraded input yields a degraded tree.
//! Errors only arise while loading or validating configuration.

use thiserror::Error;

/// Errors that can occur while configuring the tree builder
#[derive(Error, Debug)]
pub enum TreeError {
    /// Failed to read a config file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration is well-formed but unusable
    #[error("Configuration error: {0}")]
    Config(String),
}
