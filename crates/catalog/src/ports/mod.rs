//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the application layer
//! interacts with external systems (storage, observability).
//!
//! Implementations of these traits live in the adapter layers.

pub mod events;
pub mod repositories;

// Re-exports
pub use events::*;
pub use repositories::*;
