//! In-memory implementation of ProductRepository
//!
//! Behaves like the Postgres adapter: sequential IDs starting at 1, unique
//! names, listings ordered by ID. Each call is serialized by a lock.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::context::RequestContext;
use crate::domain::{errors::RepositoryError, Product};
use crate::ports::ProductRepository;

#[derive(Debug, Default)]
struct Store {
    last_id: i64,
    products: BTreeMap<i64, Product>,
}

impl Store {
    fn name_taken(&self, name: &str, except: Option<i64>) -> bool {
        self.products
            .values()
            .any(|p| p.name == name && Some(p.id) != except)
    }
}

/// In-memory product storage
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    store: RwLock<Store>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with already-persisted products
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut store = Store::default();
        for product in products {
            store.last_id = store.last_id.max(product.id);
            store.products.insert(product.id, product);
        }
        Self {
            store: RwLock::new(store),
        }
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.products.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_product(&self, ctx: &RequestContext, id: i64) -> Result<Product, RepositoryError> {
        ctx.run(async {
            self.store
                .read()
                .await
                .products
                .get(&id)
                .cloned()
                .ok_or(RepositoryError::NotFound)
        })
        .await
    }

    async fn create_product(
        &self,
        ctx: &RequestContext,
        product: &Product,
    ) -> Result<i64, RepositoryError> {
        ctx.run(async {
            let mut store = self.store.write().await;
            if store.name_taken(&product.name, None) {
                return Err(RepositoryError::AlreadyExists);
            }

            store.last_id += 1;
            let id = store.last_id;
            store.products.insert(
                id,
                Product {
                    id,
                    ..product.clone()
                },
            );

            Ok(id)
        })
        .await
    }

    async fn update_product(
        &self,
        ctx: &RequestContext,
        product: &Product,
    ) -> Result<(), RepositoryError> {
        ctx.run(async {
            let mut store = self.store.write().await;
            if !store.products.contains_key(&product.id) {
                return Err(RepositoryError::NotFound);
            }
            if store.name_taken(&product.name, Some(product.id)) {
                return Err(RepositoryError::AlreadyExists);
            }

            store.products.insert(product.id, product.clone());
            Ok(())
        })
        .await
    }

    async fn get_all_products(&self, ctx: &RequestContext) -> Result<Vec<Product>, RepositoryError> {
        ctx.run(async { Ok(self.store.read().await.products.values().cloned().collect()) })
            .await
    }

    async fn get_active_products(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<Product>, RepositoryError> {
        ctx.run(async {
            Ok(self
                .store
                .read()
                .await
                .products
                .values()
                .filter(|p| p.is_active())
                .cloned()
                .collect())
        })
        .await
    }
}
