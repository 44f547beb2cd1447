use crate::config::Configuration;
use crate::git::StagedFiles;
use crate::registry::ValidatorRegistry;
use crate::runner::Orchestrator;
use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Args, Clone)]
pub struct RunArgs {
    /// Files to validate (default: files staged for commit)
    pub files: Vec<PathBuf>,
}

/// Exit status when checks report findings
pub const EXIT_BLOCKED: u8 = 1;

pub async fn execute(args: RunArgs, config_path: Option<&Path>) -> Result<ExitCode> {
    let config = Arc::new(Configuration::load_with_custom_config(config_path)?);
    let registry = Arc::new(ValidatorRegistry::from_config(&config));

    let mut orchestrator = Orchestrator::new(
        std::io::stdout().lock(),
        config,
        registry,
        Box::new(StagedFiles::default()),
    );

    if orchestrator.run(args.files)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_BLOCKED))
    }
}
