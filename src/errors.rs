use thiserror::Error;

use gemform_config::ConfigError;
use gemform_core::{CoreError, TransportError};

/// Error type surfaced by the CLI entry points.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Form(#[from] CoreError),
    #[error("Transport setup failed: {0}")]
    Transport(#[from] TransportError),
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("Invalid value file: {0}")]
    ValueFile(String),
    #[error("{0}")]
    Usage(String),
}
