//! Dataset error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading candidates
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The candidate file could not be read
    #[error("Failed to read candidates from {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading candidates from stdin failed
    #[error("Failed to read candidates from stdin: {0}")]
    StdinError(#[source] std::io::Error),
}
