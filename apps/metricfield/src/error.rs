//! Error types for the metricfield CLI.
//!
//! Resolution itself never fails; these cover reading input files and
//! building a registry from configuration.

use metricfield_core::RegistryError;
use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error while reading an input file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Records file is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Registry file is not valid TOML or has the wrong shape.
    #[error("Registry config error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Registry entries failed validation.
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Input was readable but not usable (wrong top-level shape, too large).
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
