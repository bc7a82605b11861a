use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// One or more requested columns are absent from the table header.
    #[error("missing required column(s): {}", quoted(.columns))]
    MissingColumns { columns: Vec<String> },

    /// A row did not carry one cell per column.
    #[error("row has {found} cells but the table has {expected} columns")]
    RowWidth { expected: usize, found: usize },
}

fn quoted(columns: &[String]) -> String {
    columns
        .iter()
        .map(|column| format!("'{column}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, ModelError>;
