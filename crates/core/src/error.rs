//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The daily update itself never fails; these cover the edges where items
/// enter the system (fixtures, hand-built inventories).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. blank item name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A fixture document could not be parsed.
    #[error("invalid fixture: {0}")]
    InvalidFixture(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_fixture(msg: impl Into<String>) -> Self {
        Self::InvalidFixture(msg.into())
    }
}
