//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod product_repository;

pub use product_repository::*;
