use super::Output;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

pub mod install;
pub mod list;
pub mod run;
pub mod uninstall;

#[derive(Parser)]
#[command(
    name = "commit-guard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Runs configured checks and warnings before a commit",
    long_about = "commit-guard runs a configurable set of validators against the files \
                  staged for commit. Checks block the commit when they report something, \
                  warnings are shown but never block."
)]
pub struct Cli {
    /// Run as if started in <DIR> instead of current working directory
    #[arg(short = 'C', long = "directory", global = true)]
    pub directory: Option<PathBuf>,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Use custom configuration file
    #[arg(long, global = true, env = "COMMIT_GUARD_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run checks and warnings (defaults to the staged files)
    Run(run::RunArgs),
    /// Show the validators that would run
    List(list::ListArgs),
    /// Install the pre-commit hook into the current repository
    Install(install::InstallArgs),
    /// Remove the pre-commit hook installed by commit-guard
    Uninstall,
}

impl Cli {
    pub async fn run(self) -> Result<ExitCode> {
        // Change directory if specified
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        setup_logging(self.verbose, self.quiet);
        let output = Output::new(self.quiet);
        let config = self.config.as_deref();

        match self.command {
            Commands::Run(args) => run::execute(args, config).await,
            Commands::List(args) => list::execute(args, config).await,
            Commands::Install(args) => install::execute(args, &output).await,
            Commands::Uninstall => uninstall::execute(&output).await,
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    // Logs share stderr with status messages; stdout carries the report
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
