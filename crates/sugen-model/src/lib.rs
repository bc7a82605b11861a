//! Shared data model for the SUGEN format adapters.
//!
//! A [`Table`] is an ordered set of named columns and rows of [`CellValue`]s,
//! loaded whole from disk by `sugen-ingest` and written back by
//! `sugen-output`. A [`RenameTable`] is the ordered list of
//! source-to-target column names used to rename and project a table.

pub mod error;
pub mod mapping;
pub mod table;

pub use error::{ModelError, Result};
pub use mapping::{ColumnRename, RenameTable};
pub use table::{CellValue, Table};
