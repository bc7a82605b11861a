//! Extract SUGEN phenotype columns from a delimited table.

use clap::Parser;
use sugen_cli::cli::PhenotypeCli;
use sugen_cli::commands::run_phenotypes;
use sugen_cli::logging::init_logging;

fn main() {
    let cli = PhenotypeCli::parse();
    cli.logging.color.write_global();
    if let Err(error) = init_logging(&cli.logging.log_config()) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run_phenotypes(&cli) {
        Ok(summary) => {
            tracing::info!(
                output = %summary.output.display(),
                rows = summary.rows,
                columns = summary.columns,
                "phenotype file written"
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
