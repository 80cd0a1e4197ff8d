//! Error types for the rewrite engine.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for rewrite operations.
#[derive(Error, Debug)]
pub enum RestyleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Root directory not found: {0}")]
    RootNotFound(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A specialized Result type for rewrite operations.
pub type Result<T> = std::result::Result<T, RestyleError>;
