//! Report error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while producing a billing report.
///
/// Every variant is terminal: the caller maps it to a console message and
/// ends the run. Nothing is retried.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Input file does not exist.
    #[error("input file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Input content is not a valid billing record array.
    #[error("invalid billing data: {0}")]
    Parse(#[from] serde_json::Error),

    /// The input parsed but held no records at all.
    #[error("no records in input")]
    EmptyInput,

    /// Records exist but none has a positive value.
    #[error("no records with positive billing")]
    NoPositiveBilling,

    /// Read failure past the existence check.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
