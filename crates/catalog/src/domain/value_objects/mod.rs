//! Value Objects
//!
//! Closed enumerations whose string tags are part of the wire contract.

mod category;
mod status;

pub use category::*;
pub use status::*;
