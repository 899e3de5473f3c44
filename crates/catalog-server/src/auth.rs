//! Simple API Key Authentication (Bearer Token)
//!
//! Two keys: the admin key opens every route, the service key only the
//! service-staff listing. With no key configured auth is disabled.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ErrorResponse;
use crate::AppState;

/// Route group a request is authenticated for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Access {
    Admin,
    Service,
}

fn unauthorized(code: &str, message: &str) -> Response {
    (
        axum::http::StatusCode::UNAUTHORIZED,
        Json(ErrorResponse {
            code: code.to_string(),
            message: message.to_string(),
        }),
    )
        .into_response()
}

/// Authentication middleware for `/admin/*`
pub async fn admin_auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    authenticate(&state, Access::Admin, request, next).await
}

/// Authentication middleware for `/service/*`
pub async fn service_auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    authenticate(&state, Access::Service, request, next).await
}

async fn authenticate(state: &AppState, access: Access, request: Request, next: Next) -> Response {
    let config = &state.config;

    // No API key configured = auth disabled (for development)
    if config.api_key.is_none() && config.service_api_key.is_none() {
        return next.run(request).await;
    }

    let accepted = match access {
        Access::Admin => [config.api_key.as_deref(), None],
        Access::Service => [config.api_key.as_deref(), config.service_api_key.as_deref()],
    };

    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    match auth_header.map(|h| h.strip_prefix("Bearer ")) {
        Some(Some(token)) if accepted.contains(&Some(token)) => next.run(request).await,
        Some(Some(_)) => {
            tracing::warn!(?access, "Invalid API key attempted");
            unauthorized("invalid_api_key", "Invalid API key")
        }
        Some(None) => {
            tracing::warn!("Invalid Authorization header format");
            unauthorized("invalid_authorization", "Invalid Authorization header")
        }
        None => {
            tracing::warn!("Missing Authorization header");
            unauthorized("missing_authorization", "Missing Authorization header")
        }
    }
}
