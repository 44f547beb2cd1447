use std::path::PathBuf;

/// Supplies the candidate files when none are given explicitly.
pub trait FileSource {
    fn candidate_files(&self) -> anyhow::Result<Vec<PathBuf>>;
}

/// A fixed list of files.
#[derive(Debug, Clone, Default)]
pub struct StaticFiles(pub Vec<PathBuf>);

impl FileSource for StaticFiles {
    fn candidate_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        Ok(self.0.clone())
    }
}
