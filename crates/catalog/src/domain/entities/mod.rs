//! Domain Entities
//!
//! - Product: the sole catalog entity

mod product;

pub use product::*;
