//! Core error type.
//!
//! Only configuration can fail at this level; runtime conditions such as a
//! full queue or a refused close are reported through return values.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `cs-core`.
pub type CoreResult<T> = Result<T, CoreError>;
