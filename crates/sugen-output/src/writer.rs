//! Delimited text rendering and atomic file writes.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, Terminator, WriterBuilder};
use sugen_model::Table;

use crate::error::{OutputError, Result};

/// How a table is rendered to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    /// Field separator byte.
    pub delimiter: u8,
    /// Text written for missing cells.
    pub missing_value: String,
}

impl WriteOptions {
    pub fn new(delimiter: u8, missing_value: impl Into<String>) -> Self {
        Self {
            delimiter,
            missing_value: missing_value.into(),
        }
    }
}

/// Renders `table` as delimited text: a header row, then one line per row.
///
/// Fields are quoted only when they contain the delimiter, a quote or a line
/// break. Lines end with `\n`.
pub fn render_delimited_table(table: &Table, options: &WriteOptions) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .delimiter(options.delimiter)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(table.columns())?;
    for row in table.rows() {
        writer.write_record(
            row.iter()
                .map(|cell| cell.as_text().unwrap_or(options.missing_value.as_str())),
        )?;
    }

    writer.into_inner().map_err(|e| OutputError::Render {
        message: e.error().to_string(),
    })
}

/// Renders `table` and writes it to `path`, replacing any existing file.
///
/// The text is written to a temporary sibling first and renamed over `path`
/// once complete. On failure the temporary file is removed and an existing
/// `path` is left untouched.
pub fn write_delimited_table(table: &Table, path: &Path, options: &WriteOptions) -> Result<()> {
    let bytes = render_delimited_table(table, options)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| OutputError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let temp_path = temp_path_for(path);
    if let Err(error) = write_synced(&temp_path, &bytes) {
        let _ = fs::remove_file(&temp_path);
        return Err(error);
    }

    if let Err(source) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(OutputError::AtomicWriteFailed {
            temp_path,
            target_path: path.to_path_buf(),
            source,
        });
    }

    tracing::info!(
        path = %path.display(),
        rows = table.height(),
        columns = table.width(),
        bytes = bytes.len(),
        "wrote table"
    );
    Ok(())
}

fn write_synced(path: &Path, bytes: &[u8]) -> Result<()> {
    let io_error = move |operation: &'static str| {
        move |source: std::io::Error| OutputError::Io {
            operation,
            path: path.to_path_buf(),
            source,
        }
    };

    let mut file = File::create(path).map_err(io_error("create"))?;
    file.write_all(bytes).map_err(io_error("write"))?;
    file.sync_all().map_err(io_error("sync"))?;
    Ok(())
}

/// `<dir>/<name>.<pid>.tmp`, next to the target so the rename stays on one
/// filesystem.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map_or_else(|| OsString::from("output"), OsString::from);
    name.push(format!(".{}.tmp", std::process::id()));
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sugen_model::CellValue;
    use tempfile::tempdir;

    fn table() -> Table {
        let mut table = Table::new(vec!["ID".into(), "Y".into(), "NOTE".into()]);
        table
            .push_row(vec![
                CellValue::text("1"),
                CellValue::Missing,
                CellValue::text("a b"),
            ])
            .unwrap();
        table
            .push_row(vec![
                CellValue::text("2"),
                CellValue::text("0.5"),
                CellValue::text("plain"),
            ])
            .unwrap();
        table
    }

    #[test]
    fn test_render_tab_separated() {
        let bytes = render_delimited_table(&table(), &WriteOptions::new(b'\t', "NA")).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "ID\tY\tNOTE\n1\tNA\ta b\n2\t0.5\tplain\n"
        );
    }

    #[test]
    fn test_render_quotes_fields_containing_delimiter() {
        let bytes = render_delimited_table(&table(), &WriteOptions::new(b' ', "NaN")).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "ID Y NOTE\n1 NaN \"a b\"\n2 0.5 plain\n"
        );
    }

    #[test]
    fn test_render_header_only() {
        let table = Table::new(vec!["A".into(), "B".into()]);
        let bytes = render_delimited_table(&table, &WriteOptions::new(b'\t', "NA")).unwrap();
        assert_eq!(bytes, b"A\tB\n");
    }

    #[test]
    fn test_write_replaces_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.tsv");
        fs::write(&path, "stale contents that are longer than the new table\n").unwrap();

        write_delimited_table(&table(), &path, &WriteOptions::new(b'\t', "NA")).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("ID\tY\tNOTE\n"));
        assert!(!written.contains("stale"));
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(leftovers, vec![OsString::from("out.tsv")]);
    }

    #[test]
    fn test_write_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("results.fmt");

        write_delimited_table(&table(), &path, &WriteOptions::new(b' ', "NaN")).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_write_is_deterministic() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.tsv");
        let options = WriteOptions::new(b'\t', "NA");

        write_delimited_table(&table(), &path, &options).unwrap();
        let first = fs::read(&path).unwrap();
        write_delimited_table(&table(), &path, &options).unwrap();
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_temp_path_is_a_sibling() {
        let temp = temp_path_for(Path::new("dir/results.fmt"));
        assert_eq!(temp.parent(), Some(Path::new("dir")));
        let name = temp.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("results.fmt."));
        assert!(name.ends_with(".tmp"));
    }
}
