//! Hook orchestration
//!
//! The [`Orchestrator`] drives one run: pick the candidate files, resolve
//! and execute warnings then checks, write at most one report per category
//! and decide whether the commit may proceed. Only checks decide; warnings
//! are shown but never change the outcome.
//!
//! Output order is fixed: warnings report, checks report, bypass hint.

mod files;
mod report;

pub use files::{FileSource, StaticFiles};
pub use report::{CHECKS_HEADER, DEFAULT_BYPASS_HINT, Report, WARNINGS_HEADER, bypass_note};

use crate::config::Configuration;
use crate::error::{HookError, HookResult};
use crate::registry::ValidatorRegistry;
use crate::resolver::ListResolver;
use crate::validator::{Category, Finding, Validator};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

pub struct Orchestrator<W: Write> {
    output: W,
    files: Arc<[PathBuf]>,
    resolver: ListResolver,
    file_source: Box<dyn FileSource>,
    bypass_hint: String,
}

impl<W: Write> Orchestrator<W> {
    pub fn new(
        output: W,
        config: Arc<Configuration>,
        registry: Arc<ValidatorRegistry>,
        file_source: Box<dyn FileSource>,
    ) -> Self {
        let bypass_hint = config.bypass_hint().to_string();
        Self {
            output,
            files: Arc::from(Vec::new()),
            resolver: ListResolver::new(registry, config),
            file_source,
            bypass_hint,
        }
    }

    /// Override the line written after a failed checks report.
    pub fn with_bypass_hint(mut self, hint: impl Into<String>) -> Self {
        self.bypass_hint = hint.into();
        self
    }

    /// Files evaluated by the current (or last) run.
    pub fn candidate_files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn resolver(&self) -> &ListResolver {
        &self.resolver
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run both categories against `files`, or the file source's files
    /// when `files` is empty.
    ///
    /// Returns `Ok(true)` when checks produced no findings. Resolution and
    /// validator failures are returned as errors and nothing is reported.
    pub fn run<I, P>(&mut self, files: I) -> HookResult<bool>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.select_files(files)?;

        let warnings = self.list_to_run(Category::Warnings)?;
        let warning_findings = self.execute(&warnings)?;
        let checks = self.list_to_run(Category::Checks)?;
        let check_findings = self.execute(&checks)?;

        self.show(Category::Warnings, &warning_findings)?;
        let checks_clean = self.show(Category::Checks, &check_findings)?;
        if !checks_clean {
            self.output
                .write_all(bypass_note(&self.bypass_hint).as_bytes())?;
        }
        self.output.flush()?;

        tracing::info!(
            files = self.files.len(),
            warnings = warning_findings.len(),
            checks = check_findings.len(),
            "hook run finished"
        );
        Ok(checks_clean)
    }

    fn select_files<I, P>(&mut self, files: I) -> HookResult<()>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let explicit: Vec<PathBuf> = files.into_iter().map(Into::into).collect();
        let selected = if explicit.is_empty() {
            tracing::debug!("no files given, asking file source");
            self.file_source
                .candidate_files()
                .map_err(HookError::FileSource)?
        } else {
            explicit
        };
        tracing::debug!("{} candidate files", selected.len());
        self.files = Arc::from(selected);
        Ok(())
    }

    /// Resolve the validators for `category` against the current files.
    pub fn list_to_run(&self, category: Category) -> HookResult<Vec<Box<dyn Validator>>> {
        self.resolver.resolve(category, &self.files)
    }

    /// Evaluate `validators` in order and keep the non-absent findings.
    ///
    /// The first validator that fails to run aborts the whole batch.
    pub fn execute(&self, validators: &[Box<dyn Validator>]) -> HookResult<Vec<String>> {
        let mut findings = Vec::new();
        for validator in validators {
            tracing::trace!("evaluating {}", validator.name());
            let finding = validator.evaluate(&self.files).map_err(|source| {
                HookError::ValidatorExecution {
                    name: validator.name().to_string(),
                    source,
                }
            })?;
            if let Finding::Present(text) = finding {
                tracing::debug!("{} reported a finding", validator.name());
                findings.push(text);
            }
        }
        Ok(findings)
    }

    /// Write the report for `category`. Returns `true` when there was
    /// nothing to report.
    pub fn show(&mut self, category: Category, findings: &[String]) -> HookResult<bool> {
        let report = Report::new(category, findings);
        if report.had_findings {
            self.output.write_all(report.text.as_bytes())?;
        }
        Ok(!report.had_findings)
    }
}
