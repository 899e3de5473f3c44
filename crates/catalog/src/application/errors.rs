//! Service Errors
//!
//! The error vocabulary surfaced to transports. Repository and validation
//! failures are translated here and nowhere else.

use thiserror::Error;

use crate::domain::errors::{RepositoryError, ValidationError};

/// Classified failure of a use case
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("invalid product data: {0}")]
    InvalidProductData(#[from] ValidationError),

    #[error("product already exists")]
    ProductAlreadyExists,

    #[error("product not found")]
    ProductNotFound,

    /// Opaque storage problem; details are only logged
    #[error("storage failure")]
    StorageFailure,
}

impl ServiceError {
    /// Stable wire code for transports
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::InvalidProductData(_) => "invalid_product_data",
            ServiceError::ProductAlreadyExists => "product_already_exists",
            ServiceError::ProductNotFound => "product_not_found",
            ServiceError::StorageFailure => "internal_server_error",
        }
    }

    /// Whether the caller can fix this by changing the request
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ServiceError::StorageFailure)
    }
}

/// A classified error plus the detail that goes to the event sink
#[derive(Debug)]
pub(crate) struct Failure {
    pub(crate) error: ServiceError,
    pub(crate) detail: String,
}

impl Failure {
    pub(crate) fn invalid(err: ValidationError) -> Self {
        Self {
            detail: err.to_string(),
            error: ServiceError::InvalidProductData(err),
        }
    }

    /// Classify a failed lookup by ID
    pub(crate) fn fetch(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Self {
                error: ServiceError::ProductNotFound,
                detail: err.to_string(),
            },
            other => Self::storage(other),
        }
    }

    /// Classify a failed insert
    pub(crate) fn create(err: RepositoryError) -> Self {
        match err {
            RepositoryError::AlreadyExists => Self {
                error: ServiceError::ProductAlreadyExists,
                detail: err.to_string(),
            },
            other => Self::storage(other),
        }
    }

    pub(crate) fn storage(err: RepositoryError) -> Self {
        Self {
            error: ServiceError::StorageFailure,
            detail: err.to_string(),
        }
    }
}
