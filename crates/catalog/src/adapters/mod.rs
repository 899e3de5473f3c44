//! In-process Adapters
//!
//! Port implementations that need no external infrastructure.

mod memory;
mod sinks;

pub use memory::InMemoryProductRepository;
pub use sinks::{MemoryEventSink, TracingEventSink};
