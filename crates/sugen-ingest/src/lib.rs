//! Delimited table ingestion for the SUGEN format adapters.
//!
//! Tables are read whole into a [`sugen_model::Table`]. Every cell is kept
//! as text; cells matching a missing-value token become
//! [`sugen_model::CellValue::Missing`].
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use sugen_ingest::{Delimiter, ReadOptions, read_delimited_table};
//!
//! let options = ReadOptions::new(Delimiter::Byte(b',')).with_missing_value(".");
//! let table = read_delimited_table(Path::new("pheno.csv"), &options)?;
//! ```

mod delimiter;
mod error;
mod missing;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === Reading ===
pub use delimiter::Delimiter;
pub use missing::{COMMON_MISSING_TOKENS, MissingValues};
pub use reader::{ReadOptions, read_delimited_table};
