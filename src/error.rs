//! Error types.

use std::io;

use thiserror::Error;

/// A metrics provider call failed.
///
/// Collection errors are never fatal: the sampling loop logs them and keeps
/// the previous state of the affected subsystem.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CollectError {
    /// The metric source returned nothing usable.
    #[error("{metric} unavailable: {reason}")]
    Unavailable {
        metric: &'static str,
        reason: String,
    },
    /// No mounted filesystem covers the requested path.
    #[error("no filesystem mounted at {0}")]
    NoFilesystem(String),
}

impl CollectError {
    pub fn unavailable(metric: &'static str, reason: impl Into<String>) -> Self {
        CollectError::Unavailable {
            metric,
            reason: reason.into(),
        }
    }
}

/// Fatal dashboard errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Terminal setup, drawing or teardown failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
