//! Table transforms for the SUGEN format adapters.
//!
//! - [`phenotypes`]: project the sample-ID, outcome, exposure and covariate
//!   columns of a phenotype table, in that order.
//! - [`results`]: rename SUGEN result columns to the downstream names and
//!   drop everything else.

pub mod error;
pub mod phenotypes;
pub mod results;

pub use error::{Result, TransformError};
pub use phenotypes::{
    PHENOTYPE_DELIMITER, PHENOTYPE_MISSING_VALUE, PHENOTYPE_OUTPUT_FILE, PhenotypeColumns,
    format_phenotypes, parse_covariates,
};
pub use results::{
    RESULTS_DELIMITER, RESULTS_MISSING_VALUE, RESULTS_OUTPUT_FILE, format_results,
    results_rename_table,
};
