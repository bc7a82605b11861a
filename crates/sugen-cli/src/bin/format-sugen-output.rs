//! Rename SUGEN results columns for the downstream pipeline.

use clap::Parser;
use sugen_cli::cli::ResultsCli;
use sugen_cli::commands::run_results;
use sugen_cli::logging::init_logging;

fn main() {
    let cli = ResultsCli::parse();
    cli.logging.color.write_global();
    if let Err(error) = init_logging(&cli.logging.log_config()) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run_results(&cli) {
        Ok(summary) => {
            tracing::info!(
                output = %summary.output.display(),
                rows = summary.rows,
                "results file written"
            );
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}
