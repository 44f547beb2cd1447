use clap::Parser;
use commit_guard::{Cli, Output};
use std::process::ExitCode;

/// Exit status for fatal errors, distinct from a blocked commit
const EXIT_FATAL: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new(cli.quiet);

    match cli.run().await {
        Ok(code) => code,
        Err(err) => {
            output.error(&format!("{err:#}"));
            ExitCode::from(EXIT_FATAL)
        }
    }
}
