use sugen_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// Requested columns are absent from the input table.
    #[error(transparent)]
    Schema(#[from] ModelError),

    /// Result columns are absent after renaming; each entry names the source
    /// column and the output column it feeds.
    #[error("results table is missing column(s): {}", describe(.missing))]
    MissingResultColumns { missing: Vec<(String, String)> },
}

fn describe(missing: &[(String, String)]) -> String {
    missing
        .iter()
        .map(|(source, target)| format!("'{source}' (for {target})"))
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, TransformError>;
