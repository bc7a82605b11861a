//! Command runners shared by the two binaries.
//!
//! Each runner is one linear pass: load, transform, write. Nothing is
//! written unless loading and column resolution both succeed.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info_span;

use sugen_ingest::{Delimiter, ReadOptions, read_delimited_table};
use sugen_output::{WriteOptions, write_delimited_table};
use sugen_transform::{
    PHENOTYPE_DELIMITER, PHENOTYPE_MISSING_VALUE, PhenotypeColumns, RESULTS_DELIMITER,
    RESULTS_MISSING_VALUE, format_phenotypes, format_results, parse_covariates,
};

use crate::cli::{PhenotypeCli, ResultsCli};

/// What a successful run wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output: PathBuf,
    pub rows: usize,
    pub columns: usize,
}

pub fn run_phenotypes(args: &PhenotypeCli) -> Result<RunSummary> {
    let span = info_span!("phenotypes", input = %args.phenofile.display());
    let _guard = span.enter();

    let options = ReadOptions::new(args.delimiter.clone()).with_missing_value(args.missing.as_str());
    let input = read_delimited_table(&args.phenofile, &options)
        .with_context(|| format!("load phenotypes from {}", args.phenofile.display()))?;

    let columns = PhenotypeColumns::new(&args.sample_id_header, &args.outcome, &args.exposure)
        .with_covariates(parse_covariates(&args.covar_names));
    let formatted = format_phenotypes(&input, &columns)
        .with_context(|| format!("select phenotype columns from {}", args.phenofile.display()))?;

    let write_options = WriteOptions::new(PHENOTYPE_DELIMITER, PHENOTYPE_MISSING_VALUE);
    write_delimited_table(&formatted, &args.output, &write_options)
        .with_context(|| format!("write {}", args.output.display()))?;

    Ok(RunSummary {
        output: args.output.clone(),
        rows: formatted.height(),
        columns: formatted.width(),
    })
}

pub fn run_results(args: &ResultsCli) -> Result<RunSummary> {
    let span = info_span!(
        "results",
        input = %args.resfile.display(),
        exposure = %args.exposure
    );
    let _guard = span.enter();

    // SUGEN writes tab-separated results; only empty and NA-style cells are missing.
    let options = ReadOptions::new(Delimiter::TAB);
    let input = read_delimited_table(&args.resfile, &options)
        .with_context(|| format!("load results from {}", args.resfile.display()))?;

    let formatted = format_results(input, &args.exposure)
        .with_context(|| format!("rename result columns from {}", args.resfile.display()))?;

    let write_options = WriteOptions::new(RESULTS_DELIMITER, RESULTS_MISSING_VALUE);
    write_delimited_table(&formatted, &args.output, &write_options)
        .with_context(|| format!("write {}", args.output.display()))?;

    Ok(RunSummary {
        output: args.output.clone(),
        rows: formatted.height(),
        columns: formatted.width(),
    })
}
