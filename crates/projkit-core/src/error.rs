//! Error types shared by the runner, the scaffolding workflow and the
//! branch-protection helper.

use std::fmt;
use thiserror::Error;

/// A step that touched the outside world failed.
///
/// Carries the caller's description of the step and whatever diagnostic
/// text the failure produced (child stderr, spawn error, filesystem error).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionError {
    pub message: String,
    pub detail: String,
}

impl ExecutionError {
    pub fn new(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            detail: detail.into(),
        }
    }

    /// Wrap an I/O failure that happened while performing a step
    pub fn io(message: impl Into<String>, err: &std::io::Error) -> Self {
        Self::new(message, err.to_string())
    }
}

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let detail = self.detail.trim();
        if detail.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}\n{}", self.message, detail)
        }
    }
}

impl std::error::Error for ExecutionError {}

/// Errors produced by the scaffolding workflow
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Bad input, missing tool or pre-existing target. Raised before any side effect.
    #[error("{0}")]
    Validation(String),

    /// An external tool or filesystem step failed.
    #[error(transparent)]
    Execution(#[from] ExecutionError),
}

impl ScaffoldError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;
