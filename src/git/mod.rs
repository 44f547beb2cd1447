//! Git integration
//!
//! Provides the staged-file source used when `run` gets no explicit files,
//! and installation of the `pre-commit` hook script. Everything goes
//! through git2.

mod hooks;
mod operations;

pub use hooks::{HOOK_MARKER, HookStatus};

use crate::runner::FileSource;
use anyhow::{Context, Result};
use git2::Repository;
use std::path::{Path, PathBuf};

pub struct GitRepo {
    pub repo: Repository,
}

impl GitRepo {
    /// Discover the repository containing the current directory.
    pub fn discover() -> Result<Self> {
        Self::discover_from(".")
    }

    pub fn discover_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path.as_ref()).with_context(|| {
            format!("No Git repository found at {}", path.as_ref().display())
        })?;
        Ok(Self { repo })
    }

    /// The `.git` directory.
    pub fn git_dir(&self) -> &Path {
        self.repo.path()
    }

    pub fn workdir(&self) -> Result<&Path> {
        self.repo
            .workdir()
            .context("Repository has no working directory")
    }
}

/// Files staged in the repository containing `start`.
#[derive(Debug, Clone)]
pub struct StagedFiles {
    start: PathBuf,
}

impl StagedFiles {
    pub fn new(start: impl Into<PathBuf>) -> Self {
        Self {
            start: start.into(),
        }
    }
}

impl Default for StagedFiles {
    fn default() -> Self {
        Self::new(".")
    }
}

impl FileSource for StagedFiles {
    fn candidate_files(&self) -> Result<Vec<PathBuf>> {
        let repo = GitRepo::discover_from(&self.start)?;
        let staged = repo.get_staged_files()?;
        tracing::debug!("{} staged files", staged.len());
        Ok(staged)
    }
}
