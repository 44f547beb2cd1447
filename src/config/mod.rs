//! Configuration for hook runs
//!
//! A [`Configuration`] carries, per category, the ordered set of enabled
//! validator names and the set of excluded names, plus the command
//! validators declared in config files and the bypass hint printed when
//! checks fail. It is built once per invocation and never mutated after.

mod loader;
mod names;

pub use loader::DEFAULT_CONFIG;
pub use names::NameSet;

use crate::runner::DEFAULT_BYPASS_HINT;
use crate::validator::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-category lists as written in config files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryConfig {
    /// Validators to run, in order
    pub enabled: Vec<String>,

    /// Appended after `enabled`, so a project can extend the defaults
    pub add: Vec<String>,

    /// Never run these, even when enabled
    pub remove: Vec<String>,
}

/// A validator backed by a shell command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    /// Shell command, run through `sh -c`
    pub command: String,

    /// Shown above the command output when it fails
    #[serde(default)]
    pub description: String,

    /// Glob patterns selecting the files handed to the command (empty = all)
    #[serde(default)]
    pub patterns: Vec<String>,

    /// Append the matching files to the command line
    #[serde(default = "default_pass_files")]
    pub pass_files: bool,
}

fn default_pass_files() -> bool {
    true
}

/// Merged on-disk representation, as extracted from figment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub checks: CategoryConfig,
    pub warnings: CategoryConfig,
    pub bypass_hint: String,
    pub validators: BTreeMap<String, CommandSpec>,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            checks: CategoryConfig::default(),
            warnings: CategoryConfig::default(),
            bypass_hint: DEFAULT_BYPASS_HINT.to_string(),
            validators: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct CategorySets {
    enabled: NameSet,
    excluded: NameSet,
}

impl From<CategoryConfig> for CategorySets {
    fn from(raw: CategoryConfig) -> Self {
        Self {
            enabled: raw.enabled.into_iter().chain(raw.add).collect(),
            excluded: raw.remove.into_iter().collect(),
        }
    }
}

/// Immutable, per-invocation configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    checks: CategorySets,
    warnings: CategorySets,
    bypass_hint: String,
    commands: BTreeMap<String, CommandSpec>,
}

impl Configuration {
    /// Build a configuration directly from the four name lists.
    pub fn new<I, S>(
        checks_enabled: I,
        checks_excluded: I,
        warnings_enabled: I,
        warnings_excluded: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            checks: CategorySets {
                enabled: checks_enabled.into_iter().collect(),
                excluded: checks_excluded.into_iter().collect(),
            },
            warnings: CategorySets {
                enabled: warnings_enabled.into_iter().collect(),
                excluded: warnings_excluded.into_iter().collect(),
            },
            bypass_hint: DEFAULT_BYPASS_HINT.to_string(),
            commands: BTreeMap::new(),
        }
    }

    /// Replace the line printed after a failed checks report.
    pub fn with_bypass_hint(mut self, hint: impl Into<String>) -> Self {
        self.bypass_hint = hint.into();
        self
    }

    /// Declare a command validator under `name`.
    pub fn with_command(mut self, name: impl Into<String>, spec: CommandSpec) -> Self {
        self.commands.insert(name.into(), spec);
        self
    }

    fn sets(&self, category: Category) -> &CategorySets {
        match category {
            Category::Checks => &self.checks,
            Category::Warnings => &self.warnings,
        }
    }

    /// Enabled names for `category`, in configured order.
    pub fn enabled(&self, category: Category) -> &NameSet {
        &self.sets(category).enabled
    }

    /// Names that must never run for `category`.
    pub fn excluded(&self, category: Category) -> &NameSet {
        &self.sets(category).excluded
    }

    pub fn bypass_hint(&self) -> &str {
        &self.bypass_hint
    }

    /// Command validators declared in config, keyed by name.
    pub fn commands(&self) -> &BTreeMap<String, CommandSpec> {
        &self.commands
    }
}

impl Default for Configuration {
    fn default() -> Self {
        ConfigFile::default().into()
    }
}

impl From<ConfigFile> for Configuration {
    fn from(raw: ConfigFile) -> Self {
        Self {
            checks: raw.checks.into(),
            warnings: raw.warnings.into(),
            bypass_hint: raw.bypass_hint,
            commands: raw.validators,
        }
    }
}
