use crate::cli::Output;
use crate::git::{GitRepo, HookStatus};
use anyhow::Result;
use std::process::ExitCode;

pub async fn execute(output: &Output) -> Result<ExitCode> {
    let repo = GitRepo::discover()?;

    match repo.hook_status()? {
        HookStatus::Foreign => {
            output.warning("The pre-commit hook was not installed by commit-guard, leaving it alone");
        }
        HookStatus::Missing => output.info("No pre-commit hook installed"),
        HookStatus::Ours => {
            repo.remove_hook()?;
            output.success("Removed pre-commit hook");
        }
    }
    Ok(ExitCode::SUCCESS)
}
