//! Error types for flocclib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while collecting and counting files
#[derive(Error, Debug)]
pub enum FloccError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Path is neither a regular file nor a directory
    #[error("unsupported input path: {0}")]
    UnsupportedPath(PathBuf),

    /// Git operation failed
    #[error("git error: {0}")]
    Git(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
