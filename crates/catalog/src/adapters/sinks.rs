//! Event sinks
//!
//! `TracingEventSink` writes service events as structured `tracing` events.
//! `MemoryEventSink` keeps them in memory for inspection.

use std::sync::Mutex;

use crate::application::{Outcome, ServiceEvent, Severity};
use crate::context::RequestContext;
use crate::ports::EventSink;

/// Emits one `tracing` event per service outcome
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn record(&self, ctx: &RequestContext, event: &ServiceEvent) {
        let request_id = ctx.request_id();
        let operation = event.operation.as_str();
        let message = event.message();

        match (&event.outcome, event.severity()) {
            (Outcome::Succeeded, _) => tracing::info!(
                %request_id,
                operation,
                product_id = event.product_id,
                product_name = event.product_name.as_deref(),
                count = event.count,
                "{}",
                message
            ),
            (Outcome::Failed { error, detail }, Severity::Error) => tracing::error!(
                %request_id,
                operation,
                product_id = event.product_id,
                product_name = event.product_name.as_deref(),
                code = error.code(),
                detail = %detail,
                "{}",
                message
            ),
            (Outcome::Failed { error, detail }, _) => tracing::warn!(
                %request_id,
                operation,
                product_id = event.product_id,
                product_name = event.product_name.as_deref(),
                code = error.code(),
                detail = %detail,
                "{}",
                message
            ),
        }
    }
}

/// Records events in order, keyed by request
#[derive(Debug, Default)]
pub struct MemoryEventSink {
    events: Mutex<Vec<(RequestContext, ServiceEvent)>>,
}

impl MemoryEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events recorded so far
    pub fn events(&self) -> Vec<ServiceEvent> {
        self.lock().iter().map(|(_, e)| e.clone()).collect()
    }

    /// Events recorded under the given request context
    pub fn events_for(&self, ctx: &RequestContext) -> Vec<ServiceEvent> {
        self.lock()
            .iter()
            .filter(|(c, _)| c.request_id() == ctx.request_id())
            .map(|(_, e)| e.clone())
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(RequestContext, ServiceEvent)>> {
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl EventSink for MemoryEventSink {
    fn record(&self, ctx: &RequestContext, event: &ServiceEvent) {
        self.lock().push((*ctx, event.clone()));
    }
}
