//! Whole-file delimited table reading.

use std::fs::{self, File};
use std::path::Path;

use csv::ReaderBuilder;
use sugen_model::{CellValue, Table};
use tracing::{debug, debug_span, warn};

use crate::delimiter::Delimiter;
use crate::error::{IngestError, Result};
use crate::missing::MissingValues;

/// How to split and interpret an input table.
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Field separator.
    pub delimiter: Delimiter,
    /// Extra cell texts that load as missing.
    pub missing_values: Vec<String>,
    /// Whether [`crate::COMMON_MISSING_TOKENS`] also load as missing.
    pub common_missing: bool,
}

impl ReadOptions {
    pub fn new(delimiter: Delimiter) -> Self {
        Self {
            delimiter,
            missing_values: Vec::new(),
            common_missing: true,
        }
    }

    /// Adds a token that marks a missing cell.
    #[must_use]
    pub fn with_missing_value(mut self, token: impl Into<String>) -> Self {
        self.missing_values.push(token.into());
        self
    }

    /// Enable or disable the common missing markers (`NA`, `NaN`, ...).
    #[must_use]
    pub fn with_common_missing(mut self, enable: bool) -> Self {
        self.common_missing = enable;
        self
    }

    fn missing(&self) -> MissingValues {
        let base = if self.common_missing {
            MissingValues::default()
        } else {
            MissingValues::without_common()
        };
        self.missing_values
            .iter()
            .fold(base, |missing, token| missing.with_token(token.as_str()))
    }
}

/// Reads a delimited text file with a header row into a [`Table`].
///
/// Blank lines are skipped and a leading UTF-8 BOM is removed from the
/// header. Every data row must have as many fields as the header.
pub fn read_delimited_table(path: &Path, options: &ReadOptions) -> Result<Table> {
    let span = debug_span!(
        "read_table",
        path = %path.display(),
        delimiter = %options.delimiter
    );
    let _guard = span.enter();

    let missing = options.missing();
    let table = match &options.delimiter {
        Delimiter::Byte(byte) => read_separated(path, *byte, &missing)?,
        Delimiter::Whitespace => read_line_separated(path, &missing, split_whitespace_quoted)?,
        Delimiter::Literal(separator) => read_line_separated(path, &missing, |line| {
            line.split(separator.as_str()).map(str::to_string).collect()
        })?,
    };

    for name in table.duplicate_columns() {
        warn!(
            path = %path.display(),
            column = name,
            "duplicate column name; lookups use the first occurrence"
        );
    }
    debug!(
        rows = table.height(),
        columns = table.width(),
        "loaded table"
    );
    Ok(table)
}

fn read_separated(path: &Path, delimiter: u8, missing: &MissingValues) -> Result<Table> {
    let file = File::open(path).map_err(|e| IngestError::open(path, e))?;
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(false)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| IngestError::from_csv(path, e))?
        .clone();
    if headers.is_empty() {
        return Err(IngestError::EmptyInput {
            path: path.to_path_buf(),
        });
    }
    let columns = header_names(headers.iter());

    let mut table = Table::new(columns);
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::from_csv(path, e))?;
        push_cells(&mut table, path, record.iter(), missing)?;
    }
    Ok(table)
}

/// Reads a file whose fields are split per line by `split`. Records cannot
/// span lines.
fn read_line_separated<F>(path: &Path, missing: &MissingValues, split: F) -> Result<Table>
where
    F: Fn(&str) -> Vec<String>,
{
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::InvalidData {
            IngestError::Parse {
                path: path.to_path_buf(),
                message: "stream did not contain valid UTF-8".to_string(),
            }
        } else {
            IngestError::open(path, e)
        }
    })?;

    let mut lines = content
        .lines()
        .zip(1u64..)
        .filter(|(line, _)| !line.trim().is_empty());

    let Some((header, _)) = lines.next() else {
        return Err(IngestError::EmptyInput {
            path: path.to_path_buf(),
        });
    };
    let columns = header_names(split(header).iter().map(String::as_str));

    let mut table = Table::new(columns);
    for (line, number) in lines {
        let fields = split(line);
        if fields.len() != table.width() {
            return Err(IngestError::UnequalRow {
                path: path.to_path_buf(),
                line: number,
                expected: table.width(),
                found: fields.len(),
            });
        }
        push_cells(&mut table, path, fields.iter().map(String::as_str), missing)?;
    }
    Ok(table)
}

/// Splits on runs of whitespace. A field opening with `"` runs to the
/// closing quote and may contain whitespace; `""` inside it is a literal
/// quote.
fn split_whitespace_quoted(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut chars = line.chars().peekable();
    loop {
        while chars.next_if(|ch| ch.is_whitespace()).is_some() {}
        let Some(&first) = chars.peek() else {
            break;
        };

        let mut field = String::new();
        if first == '"' {
            chars.next();
            while let Some(ch) = chars.next() {
                if ch != '"' {
                    field.push(ch);
                } else if chars.next_if_eq(&'"').is_some() {
                    field.push('"');
                } else {
                    break;
                }
            }
        }
        while let Some(ch) = chars.next_if(|ch| !ch.is_whitespace()) {
            field.push(ch);
        }
        fields.push(field);
    }
    fields
}

fn header_names<'a>(fields: impl Iterator<Item = &'a str>) -> Vec<String> {
    fields
        .enumerate()
        .map(|(idx, name)| {
            if idx == 0 {
                name.trim_start_matches('\u{feff}').to_string()
            } else {
                name.to_string()
            }
        })
        .collect()
}

fn push_cells<'a>(
    table: &mut Table,
    path: &Path,
    fields: impl Iterator<Item = &'a str>,
    missing: &MissingValues,
) -> Result<()> {
    let row = fields
        .map(|field| {
            if missing.is_missing(field) {
                CellValue::Missing
            } else {
                CellValue::text(field)
            }
        })
        .collect();
    table.push_row(row).map_err(|e| IngestError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
