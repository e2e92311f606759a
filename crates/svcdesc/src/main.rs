//! svcdesc - Entry point
//!
//! Parses the bootstrap flags, installs logging and runs one command.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use svcdesc::cli::{run, Cli};
use svcdesc::telemetry::init_logging;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli.log_config()) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    let mut stdout = io::stdout().lock();
    match run(&cli, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
