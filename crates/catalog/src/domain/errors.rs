//! Domain Errors
//!
//! Error types for domain validation and repository operations.

use thiserror::Error;

/// Rejection raised by the Product entity when an invariant does not hold
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid name: must not be empty")]
    EmptyName,

    #[error("invalid net price: {0} cents is negative")]
    NegativePrice(i64),

    #[error("invalid category: {0:?}")]
    InvalidCategory(String),
}

/// Failures reported by a product repository
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,

    #[error("record already exists")]
    AlreadyExists,

    #[error("repository error: {0}")]
    Other(String),
}

impl RepositoryError {
    pub fn other<T: ToString>(err: T) -> Self {
        Self::Other(err.to_string())
    }
}
