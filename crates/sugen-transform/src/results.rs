//! SUGEN results renaming for the downstream pipeline.

use sugen_model::{RenameTable, Table};
use tracing::{debug, info, warn};

use crate::error::{Result, TransformError};

/// Default output file name, relative to the working directory.
pub const RESULTS_OUTPUT_FILE: &str = "results.fmt";

/// Output field separator.
pub const RESULTS_DELIMITER: u8 = b' ';

/// Output text for missing cells.
pub const RESULTS_MISSING_VALUE: &str = "NaN";

/// SUGEN result column to pipeline column, in output order.
///
/// The interaction estimate and its variance are named after the exposure.
pub fn results_rename_table(exposure: &str) -> RenameTable {
    RenameTable::new()
        .with("VCF_ID", "SNPID")
        .with("REF", "Allele1")
        .with("ALT", "Allele2")
        .with(format!("BETA_G:{exposure}"), "Beta_Interaction_1")
        .with(
            format!("COV_G:{exposure}_G:{exposure}"),
            "Var_Beta_Interaction_1_1",
        )
        .with("PVALUE_INTER", "P_Value_Interaction")
        .with("PVALUE_BOTH", "P_Value_Joint")
}

/// Renames the SUGEN result columns and keeps only the seven pipeline
/// columns, in the order of [`results_rename_table`].
///
/// Columns outside the rename table are dropped. Fails if any pipeline column
/// is still absent after renaming.
pub fn format_results(mut table: Table, exposure: &str) -> Result<Table> {
    let renames = results_rename_table(exposure);
    let renamed = table.rename_columns(&renames);
    debug!(exposure, renamed, "renamed result columns");

    let missing: Vec<(String, String)> = renames
        .entries()
        .iter()
        .filter(|entry| !table.has_column(&entry.target))
        .map(|entry| (entry.source.clone(), entry.target.clone()))
        .collect();
    if !missing.is_empty() {
        return Err(TransformError::MissingResultColumns { missing });
    }

    let targets = renames.targets();
    for column in table
        .duplicate_columns()
        .into_iter()
        .filter(|name| targets.contains(name))
    {
        warn!(column, "output column appears more than once; keeping the first");
    }

    let projected = table.select(&targets)?;
    info!(
        rows = projected.height(),
        dropped = table.width().saturating_sub(projected.width()),
        "formatted results"
    );
    Ok(projected)
}
