//! Application Layer (Use Cases)
//!
//! Command/Query services that orchestrate the Product entity and the
//! repository port, and translate every low-level failure into
//! [`ServiceError`].

mod command;
mod errors;
mod events;
mod query;

#[cfg(test)]
pub(crate) mod testing;

pub use command::CommandService;
pub use errors::ServiceError;
pub use events::{Operation, Outcome, ServiceEvent, Severity};
pub use query::QueryService;
