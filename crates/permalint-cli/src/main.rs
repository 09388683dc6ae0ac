use permalint_core::logging;

mod cli;

use crate::cli::Cli;
use clap::Parser;

fn main() {
    let cli = Cli::parse();

    match cli.run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("permalint error: {:#}", err);
            std::process::exit(2);
        }
    }
}

/// File logging first; stderr if the state dir is unusable.
pub(crate) fn init_logging(filter: Option<&str>) {
    if let Err(err) = logging::init_logging(filter) {
        logging::init_logging_stderr(filter);
        tracing::debug!("file logging unavailable: {:#}", err);
    }
}
