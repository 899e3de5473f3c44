//! Catalog API Data Models
//!
//! Request/response shapes of the HTTP contract. Field names are part of
//! the wire contract.

mod error;
mod product;

pub use error::*;
pub use product::*;
