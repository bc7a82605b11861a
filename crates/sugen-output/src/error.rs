//! Output error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while rendering or writing a table.
#[derive(Debug, Error)]
pub enum OutputError {
    /// File I/O error.
    #[error("failed to {operation} file {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rendering to delimited text failed.
    #[error("failed to render table: {message}")]
    Render { message: String },

    /// The temporary file could not be moved over the target.
    #[error("failed to replace {target_path} with {temp_path}: {source}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<csv::Error> for OutputError {
    fn from(err: csv::Error) -> Self {
        Self::Render {
            message: err.to_string(),
        }
    }
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
