//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`, so configuration problems surface unchanged.

use thiserror::Error;

/// Errors raised while validating inputs shared by every `wf-*` crate.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("road fraction {0} is outside (0, 1]")]
    InvalidFraction(f64),

    #[error("city count must be positive, got {0}")]
    InvalidCityCount(usize),

    #[error("max attempts must be positive")]
    InvalidMaxAttempts,

    #[error("unknown connection strategy {0:?} (expected \"random\" or \"nearest\")")]
    UnknownStrategy(String),
}

/// Shorthand result type for `wf-core`.
pub type CoreResult<T> = Result<T, CoreError>;
