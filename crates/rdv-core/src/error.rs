//! Shared error type for value parsing and configuration.
//!
//! Sub-crates define their own error enums for their own failure modes and
//! keep `CoreError` for the handful of things that live here (parsing a
//! pace name, validating a clock time).

use thiserror::Error;

/// The error type for `rdv-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `rdv-core`.
pub type CoreResult<T> = Result<T, CoreError>;
