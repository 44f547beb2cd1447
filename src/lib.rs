//! # commit-guard
//!
//! Runs a configurable set of named validators against the files staged for
//! commit and decides whether the commit may proceed.
//!
//! Validators come in two categories:
//!
//! - **checks** block the commit when they report a finding
//! - **warnings** are reported but never block
//!
//! The [`resolver::ListResolver`] turns configuration into an ordered list
//! of runnable validators (enabled names in order, excluded names removed),
//! and the [`runner::Orchestrator`] executes both categories, writes at most
//! one report per category and returns the pass/fail decision.
//!
//! ```no_run
//! use commit_guard::{Configuration, Orchestrator, ValidatorRegistry, git::StagedFiles};
//! use std::sync::Arc;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Arc::new(Configuration::load()?);
//! let registry = Arc::new(ValidatorRegistry::from_config(&config));
//! let mut runner = Orchestrator::new(
//!     std::io::stdout(),
//!     config,
//!     registry,
//!     Box::new(StagedFiles::default()),
//! );
//! let passed = runner.run(Vec::<std::path::PathBuf>::new())?;
//! # let _ = passed;
//! # Ok(())
//! # }
//! ```

pub mod builtins;
pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod registry;
pub mod resolver;
pub mod runner;
pub mod validator;

pub use cli::{Cli, Output};
pub use config::Configuration;
pub use error::{HookError, HookResult};
pub use registry::ValidatorRegistry;
pub use runner::Orchestrator;
pub use validator::{Category, Finding, Validator};

/// Result type alias for CLI-level operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
