//! Service Events
//!
//! One event is emitted per use-case outcome. Events are a side channel:
//! sinks observe them, they never feed back into the result.

use serde::Serialize;

use super::errors::{Failure, ServiceError};

/// Use case that produced an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    CreateProduct,
    UpdateProduct,
    ActivateProduct,
    DeactivateProduct,
    GetAllProducts,
    GetActiveProducts,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::CreateProduct => "create_product",
            Operation::UpdateProduct => "update_product",
            Operation::ActivateProduct => "activate_product",
            Operation::DeactivateProduct => "deactivate_product",
            Operation::GetAllProducts => "get_all_products",
            Operation::GetActiveProducts => "get_active_products",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a use case ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed {
        error: ServiceError,
        /// Underlying cause, for logs only
        detail: String,
    },
}

/// Log level an event should be reported at
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warn,
    Error,
}

/// Structured record of a single use-case outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEvent {
    pub operation: Operation,
    pub product_id: Option<i64>,
    pub product_name: Option<String>,
    /// Number of products returned by a listing
    pub count: Option<usize>,
    pub outcome: Outcome,
}

impl ServiceEvent {
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            product_id: None,
            product_name: None,
            count: None,
            outcome: Outcome::Succeeded,
        }
    }

    pub fn with_product_id(mut self, id: i64) -> Self {
        self.product_id = Some(id);
        self
    }

    pub fn with_product_name(mut self, name: &str) -> Self {
        self.product_name = Some(name.to_string());
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub(crate) fn failed(mut self, failure: &Failure) -> Self {
        self.outcome = Outcome::Failed {
            error: failure.error.clone(),
            detail: failure.detail.clone(),
        };
        self
    }

    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Succeeded
    }

    /// Client mistakes are warnings; storage failures are errors
    pub fn severity(&self) -> Severity {
        match &self.outcome {
            Outcome::Succeeded => Severity::Info,
            Outcome::Failed { error, .. } if error.is_client_error() => Severity::Warn,
            Outcome::Failed { .. } => Severity::Error,
        }
    }

    /// Human-readable summary, e.g. "Product created"
    pub fn message(&self) -> &'static str {
        use Operation::*;

        match (&self.outcome, self.operation) {
            (Outcome::Succeeded, CreateProduct) => "Product created",
            (Outcome::Succeeded, UpdateProduct) => "Product updated",
            (Outcome::Succeeded, ActivateProduct) => "Product activated",
            (Outcome::Succeeded, DeactivateProduct) => "Product deactivated",
            (Outcome::Succeeded, GetAllProducts) => "Retrieved all products",
            (Outcome::Succeeded, GetActiveProducts) => "Retrieved active products",
            (Outcome::Failed { error, .. }, _) => match error {
                ServiceError::InvalidProductData(_) => "Invalid product data",
                ServiceError::ProductAlreadyExists => "Product name already exists",
                ServiceError::ProductNotFound => "Product not found",
                ServiceError::StorageFailure => "Storage failure",
            },
        }
    }
}
