//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use std::process::ExitCode;

use larder_cli::CliError;

fn main() -> ExitCode {
    match larder_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("larder: {err}");
            ExitCode::FAILURE
        }
    }
}
