//! Error types for loading configuration and fetching records.
//!
//! The pipeline itself (columns, filters, pagination) has no error paths;
//! only the edges that touch files or the network do.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server responded with status {0}")]
    Status(u16),

    #[error("Invalid response body: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
