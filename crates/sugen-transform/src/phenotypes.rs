//! Phenotype table projection for SUGEN input.
//!
//! SUGEN expects a tab-separated phenotype file holding only the sample
//! identifier, the outcome, the exposure and the covariates, in that order,
//! with `NA` for missing values.

use sugen_model::Table;
use tracing::{debug, info};

use crate::error::Result;

/// Default output file name, relative to the working directory.
pub const PHENOTYPE_OUTPUT_FILE: &str = "sugen_phenotypes.tsv";

/// Output field separator.
pub const PHENOTYPE_DELIMITER: u8 = b'\t';

/// Output text for missing cells.
pub const PHENOTYPE_MISSING_VALUE: &str = "NA";

/// Splits the covariate argument on single spaces.
///
/// The empty string means no covariates. Order and duplicates are kept, and
/// consecutive spaces yield an empty name (which then fails column lookup).
pub fn parse_covariates(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(' ').map(str::to_string).collect()
}

/// The columns to extract, by input header name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhenotypeColumns {
    pub sample_id: String,
    pub outcome: String,
    pub exposure: String,
    pub covariates: Vec<String>,
}

impl PhenotypeColumns {
    pub fn new(
        sample_id: impl Into<String>,
        outcome: impl Into<String>,
        exposure: impl Into<String>,
    ) -> Self {
        Self {
            sample_id: sample_id.into(),
            outcome: outcome.into(),
            exposure: exposure.into(),
            covariates: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_covariates(mut self, covariates: Vec<String>) -> Self {
        self.covariates = covariates;
        self
    }

    /// `[sample_id, outcome, exposure, covariates...]`.
    pub fn output_columns(&self) -> Vec<&str> {
        let mut columns = Vec::with_capacity(3 + self.covariates.len());
        columns.push(self.sample_id.as_str());
        columns.push(self.outcome.as_str());
        columns.push(self.exposure.as_str());
        columns.extend(self.covariates.iter().map(String::as_str));
        columns
    }
}

/// Selects the phenotype columns from `table`, dropping all others.
///
/// Fails without producing anything if any requested column is absent.
pub fn format_phenotypes(table: &Table, columns: &PhenotypeColumns) -> Result<Table> {
    let wanted = columns.output_columns();
    debug!(
        sample_id = %columns.sample_id,
        outcome = %columns.outcome,
        exposure = %columns.exposure,
        covariates = columns.covariates.len(),
        "selecting phenotype columns"
    );

    let selected = table.select(&wanted)?;

    let dropped = table
        .columns()
        .iter()
        .filter(|name| !wanted.contains(&name.as_str()))
        .count();
    info!(
        rows = selected.height(),
        columns = selected.width(),
        dropped,
        "formatted phenotypes"
    );
    Ok(selected)
}
