//! Event Sink Port
//!
//! Observability side channel for service outcomes.

use crate::application::ServiceEvent;
use crate::context::RequestContext;

/// Receiver of structured service events
///
/// `record` is infallible: a sink cannot change the outcome of a use case.
pub trait EventSink: Send + Sync {
    fn record(&self, ctx: &RequestContext, event: &ServiceEvent);
}
