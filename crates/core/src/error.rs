//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is local to the operation that produced it: none of them
/// leave the store in a partially mutated state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (negative quantity, negative price, blank name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The targeted entity does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The operation would break uniqueness (e.g. an id that is already stored).
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        assert_eq!(
            DomainError::validation("quantity cannot be negative").to_string(),
            "validation failed: quantity cannot be negative"
        );
        assert_eq!(DomainError::not_found("product 7").to_string(), "not found: product 7");
    }

    #[test]
    fn classification_helpers() {
        assert!(DomainError::not_found("x").is_not_found());
        assert!(!DomainError::not_found("x").is_validation());
        assert!(DomainError::validation("x").is_validation());
        assert!(!DomainError::conflict("x").is_not_found());
    }
}
