//! Output generation for the SUGEN format adapters.
//!
//! A [`sugen_model::Table`] is rendered to delimited text in memory with a
//! fixed missing-value marker, then written to its destination through a
//! temporary sibling file so a failed run never leaves a truncated file.

mod error;
mod writer;

pub use error::{OutputError, Result};
pub use writer::{WriteOptions, render_delimited_table, write_delimited_table};
