//! Request Context
//!
//! Opaque per-request value passed explicitly to every service operation
//! and forwarded unchanged to repositories and event sinks.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

/// Context for a single use-case invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext {
    request_id: Uuid,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// Create a context with a fresh request id and no deadline
    pub fn new() -> Self {
        Self::with_request_id(Uuid::new_v4())
    }

    pub fn with_request_id(request_id: Uuid) -> Self {
        Self {
            request_id,
            deadline: None,
        }
    }

    /// Bound repository work to `timeout` from now
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.deadline = Some(Instant::now() + timeout);
        self
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Run a repository future under this context's deadline
    ///
    /// An elapsed deadline surfaces as `RepositoryError::Other`. A context
    /// that is already expired never polls `fut`.
    pub async fn run<F, T>(&self, fut: F) -> Result<T, RepositoryError>
    where
        F: Future<Output = Result<T, RepositoryError>>,
    {
        match self.deadline {
            Some(_) if self.is_expired() => Err(deadline_exceeded()),
            Some(deadline) => tokio::time::timeout_at(deadline, fut)
                .await
                .map_err(|_| deadline_exceeded())?,
            None => fut.await,
        }
    }
}

fn deadline_exceeded() -> RepositoryError {
    RepositoryError::Other("request deadline exceeded".to_string())
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}
