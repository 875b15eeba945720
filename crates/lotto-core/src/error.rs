//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A draw configuration cannot be satisfied.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
