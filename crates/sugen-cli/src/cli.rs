//! CLI argument definitions for the SUGEN format adapters.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{Args, ColorChoice, Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use sugen_ingest::Delimiter;
use sugen_transform::{PHENOTYPE_OUTPUT_FILE, RESULTS_OUTPUT_FILE};
use tracing::level_filters::LevelFilter;

use crate::logging::{LogConfig, LogFormat};

/// Extract phenotype, exposure and covariate columns into a SUGEN phenotype file.
#[derive(Parser)]
#[command(
    name = "format-sugen-phenos",
    version,
    about = "Write the SUGEN phenotype table (sample ID, outcome, exposure, covariates)",
    long_about = "Select the sample ID, outcome, exposure and covariate columns from a \
                  delimited phenotype table and write them tab-separated with NA for \
                  missing values.\n\n\
                  Example:\n  \
                  format-sugen-phenos pheno.csv ID Y X \"AGE SEX\" , NA"
)]
pub struct PhenotypeCli {
    /// Input phenotype table.
    #[arg(value_name = "PHENOFILE")]
    pub phenofile: PathBuf,

    /// Column holding the sample identifiers.
    #[arg(value_name = "SAMPLE_ID_HEADER")]
    pub sample_id_header: String,

    /// Outcome column.
    #[arg(value_name = "OUTCOME")]
    pub outcome: String,

    /// Exposure column.
    #[arg(value_name = "EXPOSURE")]
    pub exposure: String,

    /// Covariate columns joined by single spaces; empty for none.
    #[arg(value_name = "COVAR_NAMES", allow_hyphen_values = true)]
    pub covar_names: String,

    /// Input field separator: one character, `\t`, `tab`, `space`, `\s+`, or a
    /// short string matched literally.
    #[arg(value_name = "DELIMITER", allow_hyphen_values = true)]
    pub delimiter: Delimiter,

    /// Input text that marks a missing value.
    #[arg(value_name = "MISSING", allow_hyphen_values = true)]
    pub missing: String,

    /// Output path.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        default_value = PHENOTYPE_OUTPUT_FILE
    )]
    pub output: PathBuf,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

/// Rename SUGEN association results into the pipeline's results layout.
#[derive(Parser)]
#[command(
    name = "format-sugen-output",
    version,
    about = "Rename and filter SUGEN results into the pipeline results file",
    long_about = "Rename the variant, allele, interaction and p-value columns of a \
                  tab-separated SUGEN results table, drop every other column and write \
                  the result space-separated with NaN for missing values.\n\n\
                  Example:\n  \
                  format-sugen-output sugen_results.tsv AGE"
)]
pub struct ResultsCli {
    /// Input SUGEN results table (tab-separated).
    #[arg(value_name = "RESFILE")]
    pub resfile: PathBuf,

    /// Exposure variable used in the interaction column names.
    #[arg(value_name = "EXPOSURE")]
    pub exposure: String,

    /// Output path.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        default_value = RESULTS_OUTPUT_FILE
    )]
    pub output: PathBuf,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

/// Logging flags shared by both binaries.
#[derive(Args)]
pub struct LoggingArgs {
    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps")]
    pub log_timestamps: bool,
}

/// CLI log level choices.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl LoggingArgs {
    /// Build logging configuration from CLI flags with consistent precedence:
    /// `--log-level`, then `-v/-q`, then `RUST_LOG`, then warn.
    pub fn log_config(&self) -> LogConfig {
        let mut config = LogConfig {
            level_filter: self.verbosity.tracing_level_filter(),
            ..LogConfig::default()
        };
        config.use_env_filter = !(self.verbosity.is_present() || self.log_level.is_some());
        if let Some(level) = self.log_level {
            config.level_filter = match level {
                LogLevelArg::Error => LevelFilter::ERROR,
                LogLevelArg::Warn => LevelFilter::WARN,
                LogLevelArg::Info => LevelFilter::INFO,
                LogLevelArg::Debug => LevelFilter::DEBUG,
                LogLevelArg::Trace => LevelFilter::TRACE,
            };
        }
        config.format = match self.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        };
        config.log_file = self.log_file.clone();
        config.with_timestamps = self.log_timestamps;
        config.with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        config
    }
}
