//! Catalog Domain Library
//!
//! Core domain types, ports and use cases for the product catalog.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: the Product entity and its status transitions
//!   - `value_objects/`: closed enumerations (Category, Status)
//!   - `errors/`: validation and repository error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `events/`: Observability side channel
//!
//! - **Application Layer** (`application/`): Command and Query services,
//!   the single place where failures are classified into [`ServiceError`]
//!
//! - **Adapters** (`adapters/`): In-process port implementations
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use catalog::{CommandService, InMemoryProductRepository, RequestContext, TracingEventSink};
//!
//! let service = CommandService::new(
//!     Arc::new(InMemoryProductRepository::new()),
//!     Arc::new(TracingEventSink),
//! );
//! let id = service
//!     .create_product(&RequestContext::new(), "Fries", "crispy", 1999, "food")
//!     .await?;
//! ```

pub mod adapters;
pub mod application;
pub mod context;
pub mod domain;
pub mod ports;
pub mod telemetry;

// Re-export commonly used types
pub use adapters::{InMemoryProductRepository, MemoryEventSink, TracingEventSink};
pub use application::{
    CommandService, Operation, Outcome, QueryService, ServiceError, ServiceEvent, Severity,
};
pub use context::RequestContext;
pub use domain::{Category, Product, RepositoryError, Status, ValidationError};
pub use ports::{EventSink, ProductRepository};
