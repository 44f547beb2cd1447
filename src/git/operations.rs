use super::GitRepo;
use anyhow::{Context, Result};
use git2::{Status, StatusOptions};
use std::path::PathBuf;

impl GitRepo {
    /// Files staged for the pending commit, in status order.
    ///
    /// Paths are made relative to the current directory when it lies inside
    /// the working tree, absolute otherwise. Staged deletions are left out:
    /// there is nothing left on disk to validate.
    pub fn get_staged_files(&self) -> Result<Vec<PathBuf>> {
        let mut status_opts = StatusOptions::new();
        status_opts.include_ignored(false);
        status_opts.include_untracked(false);

        let statuses = self
            .repo
            .statuses(Some(&mut status_opts))
            .context("Failed to get repository status")?;
        let workdir = self.workdir()?;
        let cwd = std::env::current_dir().ok();

        let mut files = Vec::new();
        for entry in statuses.iter() {
            let status = entry.status();
            if !status.intersects(
                Status::INDEX_NEW
                    | Status::INDEX_MODIFIED
                    | Status::INDEX_RENAMED
                    | Status::INDEX_TYPECHANGE,
            ) {
                continue;
            }
            let Some(path) = entry.path() else {
                tracing::warn!("skipping staged entry with non UTF-8 path");
                continue;
            };
            let absolute = workdir.join(path);
            let relative = cwd
                .as_deref()
                .and_then(|cwd| absolute.strip_prefix(cwd).ok())
                .map(PathBuf::from);
            files.push(relative.unwrap_or(absolute));
        }

        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::{Repository, Signature};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn repo() -> (TempDir, GitRepo) {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        (dir, GitRepo { repo })
    }

    fn commit_all(repo: &Repository, files: &[&str]) {
        let mut index = repo.index().unwrap();
        for file in files {
            index.add_path(Path::new(file)).unwrap();
        }
        index.write().unwrap();
        let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();
        let sig = Signature::now("test", "test@example.com").unwrap();
        repo.commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
            .unwrap();
    }

    #[test]
    fn test_staged_deletions_are_skipped() {
        let (dir, git) = repo();
        fs::write(dir.path().join("gone.txt"), "bye\n").unwrap();
        fs::write(dir.path().join("kept.txt"), "one\n").unwrap();
        commit_all(&git.repo, &["gone.txt", "kept.txt"]);

        fs::remove_file(dir.path().join("gone.txt")).unwrap();
        fs::write(dir.path().join("kept.txt"), "two\n").unwrap();
        fs::write(dir.path().join("new.txt"), "three\n").unwrap();
        let mut index = git.repo.index().unwrap();
        index.remove_path(Path::new("gone.txt")).unwrap();
        index.add_path(Path::new("kept.txt")).unwrap();
        index.add_path(Path::new("new.txt")).unwrap();
        index.write().unwrap();

        let workdir = git.workdir().unwrap().to_path_buf();
        let staged = git.get_staged_files().unwrap();
        assert_eq!(staged, vec![workdir.join("kept.txt"), workdir.join("new.txt")]);
    }

    #[test]
    fn test_unstaged_changes_are_ignored() {
        let (dir, git) = repo();
        fs::write(dir.path().join("kept.txt"), "one\n").unwrap();
        commit_all(&git.repo, &["kept.txt"]);

        fs::write(dir.path().join("kept.txt"), "two\n").unwrap();
        fs::write(dir.path().join("untracked.txt"), "new\n").unwrap();

        assert!(git.get_staged_files().unwrap().is_empty());
    }
}
