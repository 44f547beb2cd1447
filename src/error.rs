//! Error types for hook runs
//!
//! Fatal conditions only. A validator reporting a problem is not an error:
//! that travels as a [`Finding`](crate::validator::Finding) and goes through
//! the report templates. Everything here bypasses the report and surfaces
//! to the operator as a distinct failure.

use crate::validator::Category;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HookError {
    /// A configured name has no registered factory.
    #[error("unknown validator '{name}' configured in {category}")]
    UnknownValidator { category: Category, name: String },

    /// A validator failed to produce a result at all.
    #[error("validator '{name}' failed to run")]
    ValidatorExecution {
        name: String,
        #[source]
        source: anyhow::Error,
    },

    /// The candidate file list could not be obtained.
    #[error("failed to collect candidate files")]
    FileSource(#[source] anyhow::Error),

    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),

    /// The layered configuration could not be extracted.
    #[error("invalid configuration: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl From<figment::Error> for HookError {
    fn from(err: figment::Error) -> Self {
        HookError::Config(Box::new(err))
    }
}

pub type HookResult<T> = std::result::Result<T, HookError>;
