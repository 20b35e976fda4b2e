//! Error types for the stringify operation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading and re-serializing a JSON file.
#[derive(Debug, Error)]
pub enum StringifyError {
    /// The path does not resolve to a readable file.
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// The file exists but reading it was refused.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// The file contents are not a syntactically valid JSON document.
    /// Carries the decoder's description, including line and column.
    #[error("malformed JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),

    /// Any other I/O failure (path is a directory, interrupted read, ...).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for stringify operations.
pub type StringifyResult<T> = Result<T, StringifyError>;
