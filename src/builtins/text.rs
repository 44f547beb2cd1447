use crate::validator::{Finding, Validator};
use regex::Regex;
use std::path::{Path, PathBuf};

/// Read `path` as text. Missing, unreadable, binary and non UTF-8 files
/// are skipped.
fn read_text(path: &Path) -> Option<String> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::trace!("skipping {}: {}", path.display(), e);
            return None;
        }
    };
    if bytes.contains(&0) {
        return None;
    }
    String::from_utf8(bytes).ok()
}

/// Run `check` on every line of every readable file, collecting hits.
fn scan_lines<F>(files: &[PathBuf], mut check: F) -> Vec<String>
where
    F: FnMut(&Path, usize, &str) -> Option<String>,
{
    let mut hits = Vec::new();
    for path in files {
        let Some(content) = read_text(path) else {
            continue;
        };
        for (idx, line) in content.lines().enumerate() {
            if let Some(hit) = check(path, idx + 1, line) {
                hits.push(hit);
            }
        }
    }
    hits
}

/// One hit per line, each newline terminated, below an optional header.
fn to_finding(header: Option<&str>, hits: Vec<String>) -> Finding {
    if hits.is_empty() {
        return Finding::Absent;
    }
    let mut text = String::new();
    if let Some(header) = header {
        text.push_str(header);
        text.push('\n');
    }
    for hit in hits {
        text.push_str(&hit);
        text.push('\n');
    }
    Finding::Present(text)
}

pub struct Tabs;

impl Tabs {
    pub const NAME: &'static str = "tabs";
}

impl Validator for Tabs {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn evaluate(&self, files: &[PathBuf]) -> anyhow::Result<Finding> {
        let hits = scan_lines(files, |path, lineno, line| {
            line.trim_start_matches(' ')
                .starts_with('\t')
                .then(|| format!("{}:{}:{}", path.display(), lineno, line))
        });
        Ok(to_finding(Some("detected tab before initial space:"), hits))
    }
}

pub struct Whitespace;

impl Whitespace {
    pub const NAME: &'static str = "whitespace";
}

impl Validator for Whitespace {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn evaluate(&self, files: &[PathBuf]) -> anyhow::Result<Finding> {
        let hits = scan_lines(files, |path, lineno, line| {
            line.ends_with(|c: char| c == ' ' || c == '\t')
                .then(|| format!("{}:{}: trailing whitespace.", path.display(), lineno))
        });
        Ok(to_finding(None, hits))
    }
}

pub struct BlankEof;

impl BlankEof {
    pub const NAME: &'static str = "blank_eof";
}

/// Line number of the first blank line in the trailing run, if any.
fn first_trailing_blank(content: &str) -> Option<usize> {
    if !content.ends_with('\n') {
        return None;
    }
    let lines: Vec<&str> = content.lines().collect();
    let trailing = lines
        .iter()
        .rev()
        .take_while(|line| line.trim().is_empty())
        .count();
    (trailing > 0).then(|| lines.len() - trailing + 1)
}

impl Validator for BlankEof {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn evaluate(&self, files: &[PathBuf]) -> anyhow::Result<Finding> {
        let hits = files
            .iter()
            .filter_map(|path| {
                let line = first_trailing_blank(&read_text(path)?)?;
                Some(format!("{}:{}: new blank line at EOF.", path.display(), line))
            })
            .collect();
        Ok(to_finding(None, hits))
    }
}

pub struct MergeConflict;

impl MergeConflict {
    pub const NAME: &'static str = "merge_conflict";
    const MARKERS: &'static str = r"^(?:<{7}(?: |$)|={7}$|>{7}(?: |$))";
}

impl Validator for MergeConflict {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn evaluate(&self, files: &[PathBuf]) -> anyhow::Result<Finding> {
        let markers = Regex::new(Self::MARKERS)?;
        let hits = scan_lines(files, |path, lineno, line| {
            markers
                .is_match(line)
                .then(|| format!("{}:{}:{}", path.display(), lineno, line))
        });
        Ok(to_finding(Some("detected merge conflict markers:"), hits))
    }
}

pub struct NbSpace;

impl NbSpace {
    pub const NAME: &'static str = "nb_space";
}

impl Validator for NbSpace {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn evaluate(&self, files: &[PathBuf]) -> anyhow::Result<Finding> {
        let mut hits = Vec::new();
        for path in files {
            let Some(content) = read_text(path) else {
                continue;
            };
            for (idx, line) in content.lines().enumerate() {
                for (col, _) in line.chars().enumerate().filter(|(_, c)| *c == '\u{a0}') {
                    hits.push(format!("{}:{}:{}", path.display(), idx + 1, col + 1));
                }
            }
        }
        Ok(to_finding(Some("detected non-breaking space:"), hits))
    }
}
