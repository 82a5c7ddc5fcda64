//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Ledger-level failure.
///
/// Every variant is an expected, user-facing condition. The `Display` text is
/// the message returned to HTTP clients, so keep it stable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No account is registered under the given external key.
    #[error("Customer not found")]
    NotFound,

    /// The external key is already registered.
    #[error("Customer already exists")]
    AlreadyExists,

    /// A withdrawal exceeds the balance derived from the statement.
    #[error("Insufficient funds")]
    InsufficientFunds,
}

impl DomainError {
    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn already_exists() -> Self {
        Self::AlreadyExists
    }

    pub fn insufficient_funds() -> Self {
        Self::InsufficientFunds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_wire_contract() {
        assert_eq!(DomainError::not_found().to_string(), "Customer not found");
        assert_eq!(DomainError::already_exists().to_string(), "Customer already exists");
        assert_eq!(DomainError::insufficient_funds().to_string(), "Insufficient funds");
    }
}
