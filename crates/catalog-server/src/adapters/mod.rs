//! Infrastructure Adapters
//!
//! Implementations of catalog ports for external systems.

pub mod postgres;

// Re-exports
pub use postgres::PgProductRepository;
