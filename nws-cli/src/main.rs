//! Binary crate for the `nws` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Dispatching on the alerts/count mode
//! - Turning fatal errors into a message and exit code

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cmd = cli::Cli::parse();
    logging::init(cmd.debug);

    match cmd.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprint!("{}", cli::fatal_message(&err));
            ExitCode::FAILURE
        }
    }
}
