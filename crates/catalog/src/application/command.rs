//! Product Command Service (Use Cases)
//!
//! Mutating use cases: create, update, activate, deactivate.

use std::sync::Arc;

use crate::context::RequestContext;
use crate::domain::Product;
use crate::ports::{EventSink, ProductRepository};

use super::errors::{Failure, ServiceError};
use super::events::{Operation, ServiceEvent};

/// Application service for mutating Product operations
pub struct CommandService<R: ProductRepository + ?Sized> {
    repo: Arc<R>,
    events: Arc<dyn EventSink>,
}

impl<R: ProductRepository + ?Sized> CommandService<R> {
    pub fn new(repo: Arc<R>, events: Arc<dyn EventSink>) -> Self {
        Self { repo, events }
    }

    /// Create a new draft product and return its assigned ID
    pub async fn create_product(
        &self,
        ctx: &RequestContext,
        name: &str,
        description: &str,
        net_price_cents: i64,
        category: &str,
    ) -> Result<i64, ServiceError> {
        let event = ServiceEvent::new(Operation::CreateProduct).with_product_name(name.trim());

        let result = async {
            let product = Product::new(name, description, net_price_cents, category)
                .map_err(Failure::invalid)?;

            self.repo
                .create_product(ctx, &product)
                .await
                .map_err(Failure::create)
        }
        .await;

        match result {
            Ok(id) => {
                self.events.record(ctx, &event.with_product_id(id));
                Ok(id)
            }
            Err(failure) => Err(self.fail(ctx, event, failure)),
        }
    }

    /// Replace name, description, price and category of an existing product
    pub async fn update_product(
        &self,
        ctx: &RequestContext,
        id: i64,
        name: &str,
        description: &str,
        net_price_cents: i64,
        category: &str,
    ) -> Result<(), ServiceError> {
        let event = ServiceEvent::new(Operation::UpdateProduct).with_product_id(id);

        let result = async {
            let mut product = self
                .repo
                .get_product(ctx, id)
                .await
                .map_err(Failure::fetch)?;

            product
                .update_details(name, description, net_price_cents, category)
                .map_err(Failure::invalid)?;

            self.repo
                .update_product(ctx, &product)
                .await
                .map_err(Failure::storage)
        }
        .await;

        self.finish(ctx, event, result)
    }

    /// Set a product's status to active
    pub async fn activate_product(&self, ctx: &RequestContext, id: i64) -> Result<(), ServiceError> {
        let event = ServiceEvent::new(Operation::ActivateProduct).with_product_id(id);
        let result = self.transition(ctx, id, Product::activate).await;
        self.finish(ctx, event, result)
    }

    /// Set a product's status to inactive
    pub async fn deactivate_product(
        &self,
        ctx: &RequestContext,
        id: i64,
    ) -> Result<(), ServiceError> {
        let event = ServiceEvent::new(Operation::DeactivateProduct).with_product_id(id);
        let result = self.transition(ctx, id, Product::deactivate).await;
        self.finish(ctx, event, result)
    }

    /// Fetch, apply a status change, persist
    async fn transition(
        &self,
        ctx: &RequestContext,
        id: i64,
        apply: fn(&mut Product),
    ) -> Result<(), Failure> {
        let mut product = self
            .repo
            .get_product(ctx, id)
            .await
            .map_err(Failure::fetch)?;

        apply(&mut product);

        self.repo
            .update_product(ctx, &product)
            .await
            .map_err(Failure::storage)
    }

    fn finish(
        &self,
        ctx: &RequestContext,
        event: ServiceEvent,
        result: Result<(), Failure>,
    ) -> Result<(), ServiceError> {
        match result {
            Ok(()) => {
                self.events.record(ctx, &event);
                Ok(())
            }
            Err(failure) => Err(self.fail(ctx, event, failure)),
        }
    }

    fn fail(&self, ctx: &RequestContext, event: ServiceEvent, failure: Failure) -> ServiceError {
        self.events.record(ctx, &event.failed(&failure));
        failure.error
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::application::testing::{stored, Harness, ScriptedRepository};
    use crate::application::{Outcome, Severity};
    use crate::domain::{Category, RepositoryError, Status, ValidationError};

    #[tokio::test]
    async fn test_create_product_returns_assigned_id() {
        let h = Harness::new(ScriptedRepository::new());
        let ctx = RequestContext::new();

        let id = h
            .command
            .create_product(&ctx, "Fries", "crispy", 1999, "food")
            .await
            .unwrap();

        assert_eq!(id, 1);
        let product = h.repo.get_product(&ctx, id).await.unwrap();
        assert_eq!(product.status, Status::Draft);
        assert_eq!(product.category, Category::Food);

        let events = h.sink.events_for(&ctx);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].operation, Operation::CreateProduct);
        assert_eq!(events[0].product_id, Some(1));
        assert!(events[0].is_success());
    }

    #[tokio::test]
    async fn test_create_invalid_product_skips_repository() {
        let h = Harness::new(ScriptedRepository::new());
        let ctx = RequestContext::new();

        let cases = [
            ("", 100, "food", ValidationError::EmptyName),
            ("  ", 100, "food", ValidationError::EmptyName),
            ("Fries", -1, "food", ValidationError::NegativePrice(-1)),
            (
                "Fries",
                100,
                "snacks",
                ValidationError::InvalidCategory("snacks".to_string()),
            ),
        ];

        for (name, price, category, expected) in cases {
            let err = h
                .command
                .create_product(&ctx, name, "", price, category)
                .await
                .unwrap_err();
            assert_eq!(err, ServiceError::InvalidProductData(expected));
        }

        assert_eq!(h.repo.creates(), 0);
        assert!(h
            .sink
            .events()
            .iter()
            .all(|e| e.severity() == Severity::Warn));
    }

    #[tokio::test]
    async fn test_create_duplicate_name() {
        let h = Harness::new(ScriptedRepository::new());
        let ctx = RequestContext::new();

        h.command
            .create_product(&ctx, "Fries", "", 100, "food")
            .await
            .unwrap();
        let err = h
            .command
            .create_product(&ctx, "Fries", "again", 200, "other")
            .await
            .unwrap_err();

        assert_eq!(err, ServiceError::ProductAlreadyExists);
    }

    #[tokio::test]
    async fn test_create_storage_failure_is_opaque() {
        let h = Harness::new(
            ScriptedRepository::new().fail_create(RepositoryError::other("disk full")),
        );
        let ctx = RequestContext::new();

        let err = h
            .command
            .create_product(&ctx, "Fries", "", 100, "food")
            .await
            .unwrap_err();

        assert_eq!(err, ServiceError::StorageFailure);
        assert!(!err.to_string().contains("disk full"));

        let events = h.sink.events();
        assert_eq!(events[0].severity(), Severity::Error);
        match &events[0].outcome {
            Outcome::Failed { detail, .. } => assert!(detail.contains("disk full")),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_product_overwrites_details() {
        let mut existing = stored(3, "Fries");
        existing.activate();
        let h = Harness::new(ScriptedRepository::seeded([existing]));
        let ctx = RequestContext::new();

        h.command
            .update_product(&ctx, 3, "Curly Fries", "spiral", 2199, "other")
            .await
            .unwrap();

        let product = h.repo.get_product(&ctx, 3).await.unwrap();
        assert_eq!(product.name, "Curly Fries");
        assert_eq!(product.description, "spiral");
        assert_eq!(product.net_price_cents, 2199);
        assert_eq!(product.category, Category::Other);
        assert_eq!(product.status, Status::Active);
    }

    #[tokio::test]
    async fn test_update_missing_product() {
        let h = Harness::new(ScriptedRepository::new());
        let ctx = RequestContext::new();

        let err = h
            .command
            .update_product(&ctx, 999, "Fries", "", 100, "food")
            .await
            .unwrap_err();

        assert_eq!(err, ServiceError::ProductNotFound);
        assert_eq!(h.repo.updates(), 0);
    }

    #[tokio::test]
    async fn test_update_with_invalid_data_skips_persist() {
        let h = Harness::new(ScriptedRepository::seeded([stored(1, "Fries")]));
        let ctx = RequestContext::new();

        let err = h
            .command
            .update_product(&ctx, 1, "Fries", "", -10, "food")
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ServiceError::InvalidProductData(ValidationError::NegativePrice(-10))
        );
        assert_eq!(h.repo.updates(), 0);
        assert_eq!(h.repo.get_product(&ctx, 1).await.unwrap().net_price_cents, 500);
    }

    #[tokio::test]
    async fn test_update_fetch_failure_is_storage_failure() {
        let h = Harness::new(
            ScriptedRepository::seeded([stored(1, "Fries")])
                .fail_get(RepositoryError::other("connection refused")),
        );

        let err = h
            .command
            .update_product(&RequestContext::new(), 1, "Fries", "", 100, "food")
            .await
            .unwrap_err();

        assert_eq!(err, ServiceError::StorageFailure);
    }

    #[tokio::test]
    async fn test_update_persist_failures_are_storage_failures() {
        for err in [
            RepositoryError::NotFound,
            RepositoryError::AlreadyExists,
            RepositoryError::other("deadlock detected"),
        ] {
            let h = Harness::new(ScriptedRepository::seeded([stored(1, "Fries")]).fail_update(err));

            let result = h
                .command
                .update_product(&RequestContext::new(), 1, "Fries", "", 100, "food")
                .await;

            assert_eq!(result, Err(ServiceError::StorageFailure));
        }
    }

    #[tokio::test]
    async fn test_activate_then_deactivate() {
        let h = Harness::new(ScriptedRepository::seeded([stored(1, "Fries")]));
        let ctx = RequestContext::new();

        h.command.activate_product(&ctx, 1).await.unwrap();
        assert_eq!(h.repo.get_product(&ctx, 1).await.unwrap().status, Status::Active);

        h.command.deactivate_product(&ctx, 1).await.unwrap();
        assert_eq!(h.repo.get_product(&ctx, 1).await.unwrap().status, Status::Inactive);

        let operations: Vec<_> = h.sink.events().iter().map(|e| e.operation).collect();
        assert_eq!(
            operations,
            vec![Operation::ActivateProduct, Operation::DeactivateProduct]
        );
    }

    #[tokio::test]
    async fn test_status_changes_are_idempotent() {
        let h = Harness::new(ScriptedRepository::seeded([stored(1, "Fries")]));
        let ctx = RequestContext::new();

        h.command.deactivate_product(&ctx, 1).await.unwrap();
        h.command.deactivate_product(&ctx, 1).await.unwrap();
        h.command.activate_product(&ctx, 1).await.unwrap();
        h.command.activate_product(&ctx, 1).await.unwrap();

        assert_eq!(h.repo.get_product(&ctx, 1).await.unwrap().status, Status::Active);
        assert_eq!(h.repo.updates(), 4);
    }

    #[tokio::test]
    async fn test_status_change_on_missing_product() {
        let h = Harness::new(ScriptedRepository::new());
        let ctx = RequestContext::new();

        assert_eq!(
            h.command.activate_product(&ctx, 7).await,
            Err(ServiceError::ProductNotFound)
        );
        assert_eq!(
            h.command.deactivate_product(&ctx, 7).await,
            Err(ServiceError::ProductNotFound)
        );
        assert_eq!(h.repo.updates(), 0);
    }

    #[tokio::test]
    async fn test_status_change_persist_failure() {
        let h = Harness::new(
            ScriptedRepository::seeded([stored(1, "Fries")])
                .fail_update(RepositoryError::other("read-only transaction")),
        );

        assert_eq!(
            h.command.activate_product(&RequestContext::new(), 1).await,
            Err(ServiceError::StorageFailure)
        );
    }

    #[tokio::test]
    async fn test_create_event_records_trimmed_name() {
        let h = Harness::new(ScriptedRepository::new());
        let ctx = RequestContext::new();

        h.command
            .create_product(&ctx, "Fries", "", 100, "food")
            .await
            .unwrap();
        let err = h
            .command
            .create_product(&ctx, "  Fries ", "", 100, "food")
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::ProductAlreadyExists);

        let names: Vec<_> = h
            .sink
            .events()
            .iter()
            .map(|e| e.product_name.clone())
            .collect();
        assert_eq!(
            names,
            vec![Some("Fries".to_string()), Some("Fries".to_string())]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_deadline_persists_nothing() {
        let h = Harness::new(ScriptedRepository::seeded([stored(1, "Fries")]));
        let ctx = RequestContext::new().with_timeout(Duration::ZERO);
        tokio::time::advance(Duration::from_millis(5)).await;

        assert_eq!(
            h.command.activate_product(&ctx, 1).await,
            Err(ServiceError::StorageFailure)
        );
        assert_eq!(
            h.command.create_product(&ctx, "Cola", "", 250, "beverage").await,
            Err(ServiceError::StorageFailure)
        );

        let fresh = RequestContext::new();
        assert_eq!(
            h.repo.get_product(&fresh, 1).await.unwrap().status,
            Status::Draft
        );
        assert_eq!(h.repo.get_all_products(&fresh).await.unwrap().len(), 1);

        let events = h.sink.events_for(&ctx);
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| e.severity() == Severity::Error));
    }
}
