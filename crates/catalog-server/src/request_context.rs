//! Per-request context middleware
//!
//! Builds the [`RequestContext`] handed to every service call and echoes its
//! id in the `x-request-id` response header.

use axum::{
    extract::{Request, State},
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use catalog::RequestContext;

use crate::AppState;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub async fn request_context(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| Uuid::parse_str(v.trim()).ok())
        .unwrap_or_else(Uuid::new_v4);

    let mut ctx = RequestContext::with_request_id(request_id);
    if let Some(timeout) = state.config.request_timeout {
        ctx = ctx.with_timeout(timeout);
    }
    request.extensions_mut().insert(ctx);

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
