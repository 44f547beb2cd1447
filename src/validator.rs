//! Validator contract
//!
//! A validator is any named unit that looks at the candidate file list and
//! either passes or hands back a block of text describing what it found.
//! Validators are grouped into two categories: checks block the commit,
//! warnings are shown but never block.

use crate::config::Configuration;
use crate::registry::ValidatorRegistry;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Which report a validator contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Category {
    /// Findings stop the commit
    Checks,
    /// Findings are reported but never stop the commit
    Warnings,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Checks => "checks",
            Category::Warnings => "warnings",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of evaluating one validator against the file list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Finding {
    /// Nothing to report
    #[default]
    Absent,
    /// Failure text, reported verbatim (may span several lines)
    Present(String),
}

impl Finding {
    /// Build a finding from validator output; empty text counts as a pass.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            Finding::Absent
        } else {
            Finding::Present(text)
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Finding::Present(_))
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            Finding::Absent => None,
            Finding::Present(text) => Some(text),
        }
    }
}

impl From<Option<String>> for Finding {
    fn from(value: Option<String>) -> Self {
        value.map(Finding::from_text).unwrap_or_default()
    }
}

/// A runnable validator, already bound to its run context.
pub trait Validator: Send + Sync {
    /// Registry name the validator was resolved from
    fn name(&self) -> &str;

    /// Evaluate the candidate files.
    ///
    /// `Err` means the validator itself broke, which aborts the whole run.
    /// Content problems are reported through [`Finding::Present`].
    fn evaluate(&self, files: &[PathBuf]) -> anyhow::Result<Finding>;
}

/// Everything a validator is bound to when it is instantiated.
#[derive(Clone)]
pub struct ValidatorContext {
    pub registry: Arc<ValidatorRegistry>,
    pub config: Arc<Configuration>,
    pub files: Arc<[PathBuf]>,
}
