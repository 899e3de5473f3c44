//! Product Repository Port
//!
//! Abstract interface for Product persistence operations. The repository
//! owns durable storage, identity assignment and name uniqueness.

use async_trait::async_trait;

use crate::context::RequestContext;
use crate::domain::{errors::RepositoryError, Product};

/// Repository interface for Product entities
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find a Product by ID, failing with `NotFound` when absent
    async fn get_product(&self, ctx: &RequestContext, id: i64) -> Result<Product, RepositoryError>;

    /// Insert a new Product and return its assigned ID
    ///
    /// Fails with `AlreadyExists` when the name is taken.
    async fn create_product(
        &self,
        ctx: &RequestContext,
        product: &Product,
    ) -> Result<i64, RepositoryError>;

    /// Overwrite the stored Product with the same ID
    async fn update_product(
        &self,
        ctx: &RequestContext,
        product: &Product,
    ) -> Result<(), RepositoryError>;

    /// Find all Products regardless of status
    async fn get_all_products(&self, ctx: &RequestContext) -> Result<Vec<Product>, RepositoryError>;

    /// Find all Products with status `active`
    async fn get_active_products(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<Product>, RepositoryError>;
}
