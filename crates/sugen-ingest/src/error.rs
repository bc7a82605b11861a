//! Error types for table ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a delimited table.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the input file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Parsing Errors ===
    /// The file has no header line.
    #[error("input file is empty: {path}")]
    EmptyInput { path: PathBuf },

    /// A data row does not have the same number of fields as the header.
    #[error("{path}: line {line} has {found} fields, expected {expected}")]
    UnequalRow {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    /// Any other tokenizer failure (invalid UTF-8, broken quoting).
    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    // === Argument Errors ===
    /// The delimiter argument cannot be used to split fields.
    #[error("invalid delimiter {value:?}: {reason}")]
    InvalidDelimiter { value: String, reason: &'static str },
}

impl IngestError {
    pub(crate) fn open(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    pub(crate) fn from_csv(path: &std::path::Path, err: csv::Error) -> Self {
        let path = path.to_path_buf();
        match err.into_kind() {
            csv::ErrorKind::Io(source) => Self::FileRead { path, source },
            csv::ErrorKind::UnequalLengths {
                pos,
                expected_len,
                len,
            } => Self::UnequalRow {
                path,
                line: pos.map_or(0, |pos| pos.line()),
                expected: usize::try_from(expected_len).unwrap_or(usize::MAX),
                found: usize::try_from(len).unwrap_or(usize::MAX),
            },
            csv::ErrorKind::Utf8 { pos, err } => Self::Parse {
                path,
                message: match pos {
                    Some(pos) => format!("line {}: {err}", pos.line()),
                    None => err.to_string(),
                },
            },
            other => Self::Parse {
                path,
                message: format!("{other:?}"),
            },
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/pheno.csv"),
        };
        assert_eq!(err.to_string(), "input file not found: /path/to/pheno.csv");
    }

    #[test]
    fn test_open_maps_not_found() {
        let err = IngestError::open(
            Path::new("missing.tsv"),
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert!(matches!(err, IngestError::FileNotFound { .. }));

        let err = IngestError::open(
            Path::new("locked.tsv"),
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, IngestError::FileRead { .. }));
    }

    #[test]
    fn test_unequal_row_display() {
        let err = IngestError::UnequalRow {
            path: PathBuf::from("pheno.csv"),
            line: 3,
            expected: 5,
            found: 4,
        };
        assert_eq!(err.to_string(), "pheno.csv: line 3 has 4 fields, expected 5");
    }
}
