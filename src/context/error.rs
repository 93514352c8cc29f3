//! Context parsing error types.

use thiserror::Error;

/// Command-line context error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContextError {
    #[error("{0} expects a key=value argument")]
    MissingValue(String),
    #[error("malformed context entry {0:?} (expected key=value)")]
    Malformed(String),
}
