//! claimcheck - validate LLM-generated claims against ground-truth data.

use clap::Parser;
use claimcheck::cli::Cli;
use claimcheck::errors::{exit_code, EXIT_SUCCESS};
use claimcheck::{logging, validate_command};
use tracing::error;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("Warning: {:#}", e);
    }

    let code = match validate_command::execute(&cli) {
        Ok(summary) => {
            if cli.json {
                match serde_json::to_string_pretty(&summary) {
                    Ok(json) => println!("{}", json),
                    Err(e) => error!("failed to serialize summary: {e}"),
                }
            } else {
                println!("{}", validate_command::summary_line(&summary));
            }
            EXIT_SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            exit_code(&err)
        }
    };

    std::process::exit(code);
}
