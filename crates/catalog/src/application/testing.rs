//! Test doubles for service tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::adapters::{InMemoryProductRepository, MemoryEventSink};
use crate::context::RequestContext;
use crate::domain::{errors::RepositoryError, Product};
use crate::ports::ProductRepository;

use super::{CommandService, QueryService};

/// In-memory repository with injectable failures and write counters
#[derive(Default)]
pub(crate) struct ScriptedRepository {
    inner: InMemoryProductRepository,
    fail_get: Option<RepositoryError>,
    fail_create: Option<RepositoryError>,
    fail_update: Option<RepositoryError>,
    fail_list: Option<RepositoryError>,
    creates: AtomicUsize,
    updates: AtomicUsize,
}

impl ScriptedRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn seeded(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            inner: InMemoryProductRepository::with_products(products),
            ..Self::default()
        }
    }

    pub(crate) fn fail_get(mut self, err: RepositoryError) -> Self {
        self.fail_get = Some(err);
        self
    }

    pub(crate) fn fail_create(mut self, err: RepositoryError) -> Self {
        self.fail_create = Some(err);
        self
    }

    pub(crate) fn fail_update(mut self, err: RepositoryError) -> Self {
        self.fail_update = Some(err);
        self
    }

    pub(crate) fn fail_list(mut self, err: RepositoryError) -> Self {
        self.fail_list = Some(err);
        self
    }

    pub(crate) fn creates(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }

    pub(crate) fn updates(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProductRepository for ScriptedRepository {
    async fn get_product(&self, ctx: &RequestContext, id: i64) -> Result<Product, RepositoryError> {
        match &self.fail_get {
            Some(err) => Err(err.clone()),
            None => self.inner.get_product(ctx, id).await,
        }
    }

    async fn create_product(
        &self,
        ctx: &RequestContext,
        product: &Product,
    ) -> Result<i64, RepositoryError> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        match &self.fail_create {
            Some(err) => Err(err.clone()),
            None => self.inner.create_product(ctx, product).await,
        }
    }

    async fn update_product(
        &self,
        ctx: &RequestContext,
        product: &Product,
    ) -> Result<(), RepositoryError> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        match &self.fail_update {
            Some(err) => Err(err.clone()),
            None => self.inner.update_product(ctx, product).await,
        }
    }

    async fn get_all_products(&self, ctx: &RequestContext) -> Result<Vec<Product>, RepositoryError> {
        match &self.fail_list {
            Some(err) => Err(err.clone()),
            None => self.inner.get_all_products(ctx).await,
        }
    }

    async fn get_active_products(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<Product>, RepositoryError> {
        match &self.fail_list {
            Some(err) => Err(err.clone()),
            None => self.inner.get_active_products(ctx).await,
        }
    }
}

/// Services sharing one repository and one recording sink
pub(crate) struct Harness {
    pub(crate) repo: Arc<ScriptedRepository>,
    pub(crate) sink: Arc<MemoryEventSink>,
    pub(crate) command: CommandService<ScriptedRepository>,
    pub(crate) query: QueryService<ScriptedRepository>,
}

impl Harness {
    pub(crate) fn new(repo: ScriptedRepository) -> Self {
        let repo = Arc::new(repo);
        let sink = Arc::new(MemoryEventSink::new());
        Self {
            command: CommandService::new(repo.clone(), sink.clone()),
            query: QueryService::new(repo.clone(), sink.clone()),
            repo,
            sink,
        }
    }
}

/// A persisted product with the given id and name
pub(crate) fn stored(id: i64, name: &str) -> Product {
    let mut product = Product::new(name, "", 500, "food").unwrap();
    product.id = id;
    product
}
