use extract_har_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible; a missing state dir only costs the log file.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and dispatch.
    match Cli::run_from_args() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            tracing::error!("{:#}", err);
            eprintln!("extract_har error: {:#}", err);
            std::process::exit(1);
        }
    }
}
