use super::GitRepo;
use anyhow::{Context, Result, bail};
use std::path::PathBuf;

/// Marks hook scripts written by this tool.
pub const HOOK_MARKER: &str = "# installed by commit-guard";

const HOOK_NAME: &str = "pre-commit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookStatus {
    Missing,
    Ours,
    Foreign,
}

fn hook_script() -> String {
    format!("#!/bin/sh\n{HOOK_MARKER}\nexec commit-guard run\n")
}

impl GitRepo {
    pub fn hook_path(&self) -> PathBuf {
        self.git_dir().join("hooks").join(HOOK_NAME)
    }

    pub fn hook_status(&self) -> Result<HookStatus> {
        let path = self.hook_path();
        if !path.exists() {
            return Ok(HookStatus::Missing);
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(if content.contains(HOOK_MARKER) {
            HookStatus::Ours
        } else {
            HookStatus::Foreign
        })
    }

    /// Write the pre-commit hook. A hook written by something else is only
    /// replaced when `force` is set.
    pub fn install_hook(&self, force: bool) -> Result<PathBuf> {
        let path = self.hook_path();
        if self.hook_status()? == HookStatus::Foreign && !force {
            bail!(
                "{} already exists and was not installed by commit-guard (use --force to replace it)",
                path.display()
            );
        }

        let hooks_dir = self.git_dir().join("hooks");
        std::fs::create_dir_all(&hooks_dir).context("Failed to create hooks directory")?;
        std::fs::write(&path, hook_script()).context("Failed to write hook file")?;

        // Make hook executable on Unix systems
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)
                .context("Failed to get hook file metadata")?
                .permissions();
            perms.set_mode(0o755);
            std::fs::set_permissions(&path, perms)
                .context("Failed to set hook file permissions")?;
        }

        tracing::info!("installed {}", path.display());
        Ok(path)
    }

    /// Remove the pre-commit hook if this tool wrote it. Returns whether a
    /// file was removed.
    pub fn remove_hook(&self) -> Result<bool> {
        match self.hook_status()? {
            HookStatus::Ours => {
                let path = self.hook_path();
                std::fs::remove_file(&path).context("Failed to remove hook file")?;
                tracing::info!("removed {}", path.display());
                Ok(true)
            }
            HookStatus::Foreign => {
                tracing::warn!("leaving foreign pre-commit hook in place");
                Ok(false)
            }
            HookStatus::Missing => Ok(false),
        }
    }
}
