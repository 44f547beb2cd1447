use crate::cli::Output;
use crate::git::GitRepo;
use anyhow::Result;
use clap::Args;
use std::process::ExitCode;

#[derive(Args, Clone)]
pub struct InstallArgs {
    /// Replace a pre-commit hook that was not installed by commit-guard
    #[arg(long)]
    pub force: bool,
}

pub async fn execute(args: InstallArgs, output: &Output) -> Result<ExitCode> {
    let repo = GitRepo::discover()?;

    if args.force {
        output.warning("Force mode enabled - will overwrite existing hooks");
    }

    let path = repo.install_hook(args.force)?;
    output.success(&format!("Installed {}", path.display()));
    Ok(ExitCode::SUCCESS)
}
