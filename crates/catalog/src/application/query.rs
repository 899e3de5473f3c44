//! Product Query Service (Use Cases)
//!
//! Read-only listings. The only failure surfaced is `StorageFailure`.

use std::sync::Arc;

use crate::context::RequestContext;
use crate::domain::{Product, RepositoryError};
use crate::ports::{EventSink, ProductRepository};

use super::errors::{Failure, ServiceError};
use super::events::{Operation, ServiceEvent};

/// Application service for Product listings
pub struct QueryService<R: ProductRepository + ?Sized> {
    repo: Arc<R>,
    events: Arc<dyn EventSink>,
}

impl<R: ProductRepository + ?Sized> QueryService<R> {
    pub fn new(repo: Arc<R>, events: Arc<dyn EventSink>) -> Self {
        Self { repo, events }
    }

    /// Get every product regardless of status
    pub async fn get_all_products(&self, ctx: &RequestContext) -> Result<Vec<Product>, ServiceError> {
        let result = self.repo.get_all_products(ctx).await;
        self.finish(ctx, Operation::GetAllProducts, result)
    }

    /// Get only products whose status is active
    pub async fn get_active_products(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<Product>, ServiceError> {
        let result = self.repo.get_active_products(ctx).await;
        self.finish(ctx, Operation::GetActiveProducts, result)
    }

    fn finish(
        &self,
        ctx: &RequestContext,
        operation: Operation,
        result: Result<Vec<Product>, RepositoryError>,
    ) -> Result<Vec<Product>, ServiceError> {
        match result {
            Ok(products) => {
                let event = ServiceEvent::new(operation).with_count(products.len());
                self.events.record(ctx, &event);
                Ok(products)
            }
            Err(err) => {
                let failure = Failure::storage(err);
                self.events
                    .record(ctx, &ServiceEvent::new(operation).failed(&failure));
                Err(failure.error)
            }
        }
    }
}
