#![deny(unsafe_code)]

use std::collections::HashSet;

use crate::error::{ModelError, Result};
use crate::mapping::RenameTable;

/// A single cell. Text is kept exactly as read; no numeric re-typing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Text(String),
    Missing,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Returns the text, or `None` for a missing cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            Self::Missing => None,
        }
    }
}

/// Row-major in-memory table.
///
/// Column order is significant and duplicate names are permitted; name
/// lookups resolve to the first column carrying the name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Appends a row, rejecting it unless it has one cell per column.
    pub fn push_row(&mut self, row: Vec<CellValue>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(ModelError::RowWidth {
                expected: self.columns.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Column names that occur more than once, in first-seen order.
    pub fn duplicate_columns(&self) -> Vec<&str> {
        let mut seen = HashSet::with_capacity(self.columns.len());
        let mut reported = HashSet::new();
        self.columns
            .iter()
            .map(String::as_str)
            .filter(|name| !seen.insert(*name) && reported.insert(*name))
            .collect()
    }

    /// Projects the table onto `names`, in that order.
    ///
    /// A name may be requested more than once; the column is then repeated.
    /// Every absent name is reported together and nothing is produced.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Table> {
        let mut indices = Vec::with_capacity(names.len());
        let mut missing = Vec::new();
        for name in names {
            let name = name.as_ref();
            match self.column_index(name) {
                Some(idx) => indices.push(idx),
                None if missing.iter().any(|m: &String| m == name) => {}
                None => missing.push(name.to_string()),
            }
        }
        if !missing.is_empty() {
            return Err(ModelError::MissingColumns { columns: missing });
        }

        let columns = names.iter().map(|name| name.as_ref().to_string()).collect();
        let rows = self
            .rows
            .iter()
            .map(|row| indices.iter().map(|&idx| row[idx].clone()).collect())
            .collect();
        Ok(Table { columns, rows })
    }

    /// Renames every column whose name is a source in `renames`.
    ///
    /// Columns without an entry keep their name. Returns how many columns
    /// were renamed.
    pub fn rename_columns(&mut self, renames: &RenameTable) -> usize {
        let mut renamed = 0;
        for column in &mut self.columns {
            if let Some(target) = renames.target_for(column) {
                *column = target.to_string();
                renamed += 1;
            }
        }
        renamed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let mut table = Table::new(vec!["ID".into(), "Y".into(), "X".into()]);
        table
            .push_row(vec![
                CellValue::text("1"),
                CellValue::text("2.5"),
                CellValue::Missing,
            ])
            .unwrap();
        table
            .push_row(vec![
                CellValue::text("2"),
                CellValue::Missing,
                CellValue::text("0.3"),
            ])
            .unwrap();
        table
    }

    #[test]
    fn push_row_rejects_wrong_width() {
        let mut table = Table::new(vec!["A".into(), "B".into()]);
        let err = table.push_row(vec![CellValue::text("1")]).unwrap_err();
        assert_eq!(
            err,
            ModelError::RowWidth {
                expected: 2,
                found: 1
            }
        );
        assert_eq!(table.height(), 0);
    }

    #[test]
    fn select_reorders_and_repeats() {
        let selected = sample().select(&["X", "ID", "X"]).unwrap();
        assert_eq!(selected.columns(), ["X", "ID", "X"]);
        assert_eq!(selected.height(), 2);
        assert_eq!(
            selected.rows()[1],
            vec![
                CellValue::text("0.3"),
                CellValue::text("2"),
                CellValue::text("0.3")
            ]
        );
    }

    #[test]
    fn select_reports_all_missing_columns_once() {
        let err = sample().select(&["ID", "AGE", "SEX", "AGE"]).unwrap_err();
        assert_eq!(
            err,
            ModelError::MissingColumns {
                columns: vec!["AGE".to_string(), "SEX".to_string()]
            }
        );
    }

    #[test]
    fn select_nothing_keeps_row_count() {
        let selected = sample().select::<&str>(&[]).unwrap();
        assert_eq!(selected.width(), 0);
        assert_eq!(selected.height(), 2);
    }

    #[test]
    fn rename_columns_leaves_unknown_names() {
        let mut table = sample();
        let renames = RenameTable::new().with("ID", "SNPID").with("Z", "Unused");
        assert_eq!(table.rename_columns(&renames), 1);
        assert_eq!(table.columns(), ["SNPID", "Y", "X"]);
    }

    #[test]
    fn duplicate_columns_are_reported_once() {
        let table = Table::new(vec!["A".into(), "B".into(), "A".into(), "A".into()]);
        assert_eq!(table.duplicate_columns(), vec!["A"]);
        assert_eq!(table.column_index("A"), Some(0));
    }
}
