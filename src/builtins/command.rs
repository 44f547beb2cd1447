use crate::config::CommandSpec;
use crate::validator::{Finding, Validator};
use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::PathBuf;
use std::process::Command;

/// Runs a configured shell command over the matching candidate files.
///
/// Exit status 0 passes; any other status turns the command output into a
/// finding. Failing to start the shell is an execution error.
pub struct CommandValidator {
    name: String,
    spec: CommandSpec,
}

impl CommandValidator {
    pub fn new(name: impl Into<String>, spec: CommandSpec) -> Self {
        Self {
            name: name.into(),
            spec,
        }
    }

    fn globs(&self) -> Result<Option<GlobSet>> {
        if self.spec.patterns.is_empty() {
            return Ok(None);
        }
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.spec.patterns {
            builder.add(
                Glob::new(pattern)
                    .with_context(|| format!("invalid pattern '{}' for {}", pattern, self.name))?,
            );
        }
        Ok(Some(builder.build()?))
    }

    fn matching_files<'a>(&self, files: &'a [PathBuf]) -> Result<Vec<&'a PathBuf>> {
        Ok(match self.globs()? {
            Some(globs) => files.iter().filter(|f| globs.is_match(f)).collect(),
            None => files.iter().collect(),
        })
    }

    fn header(&self) -> String {
        if self.spec.description.is_empty() {
            format!("{} failed", self.name)
        } else {
            self.spec.description.clone()
        }
    }
}

impl Validator for CommandValidator {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, files: &[PathBuf]) -> Result<Finding> {
        let matching = self.matching_files(files)?;
        // A command that takes files has nothing to do without any
        if matching.is_empty() && (self.spec.pass_files || !self.spec.patterns.is_empty()) {
            tracing::debug!("{}: no matching files, skipping", self.name);
            return Ok(Finding::Absent);
        }

        let mut cmd = Command::new("sh");
        if self.spec.pass_files {
            cmd.arg("-c")
                .arg(format!("{} \"$@\"", self.spec.command))
                .arg(&self.name)
                .args(&matching);
        } else {
            cmd.arg("-c").arg(&self.spec.command);
        }

        tracing::debug!("{}: running `{}` on {} files", self.name, self.spec.command, matching.len());
        let output = cmd
            .output()
            .with_context(|| format!("failed to run `{}`", self.spec.command))?;

        if output.status.success() {
            return Ok(Finding::Absent);
        }

        let mut captured = String::from_utf8_lossy(&output.stdout).into_owned();
        captured.push_str(&String::from_utf8_lossy(&output.stderr));
        let captured = captured.trim_end();

        let text = if captured.is_empty() {
            match output.status.code() {
                Some(code) => format!("{} (exit status {})", self.header(), code),
                None => format!("{} (terminated by signal)", self.header()),
            }
        } else {
            format!("{}:\n{}", self.header(), captured)
        };
        Ok(Finding::Present(text))
    }
}
