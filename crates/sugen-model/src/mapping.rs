//! Ordered source-to-target column renames.

/// One column rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRename {
    pub source: String,
    pub target: String,
}

/// Ordered list of column renames, matched by exact name.
///
/// Entry order is the output column order when the targets are used as a
/// projection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameTable {
    entries: Vec<ColumnRename>,
}

impl RenameTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rename.
    #[must_use]
    pub fn with(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.entries.push(ColumnRename {
            source: source.into(),
            target: target.into(),
        });
        self
    }

    pub fn entries(&self) -> &[ColumnRename] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Target name for `source`; the first matching entry wins.
    pub fn target_for(&self, source: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.source == source)
            .map(|entry| entry.target.as_str())
    }

    /// Target names in entry order.
    pub fn targets(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|entry| entry.target.as_str())
            .collect()
    }
}
