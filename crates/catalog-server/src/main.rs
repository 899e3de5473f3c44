use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use anyhow::Context;

mod adapters;
mod auth;
mod config;
mod extract;
mod models;
mod request_context;
mod routes;

use adapters::PgProductRepository;
use catalog::{CommandService, EventSink, ProductRepository, QueryService, TracingEventSink};
use config::ServerConfig;

/// Type aliases for application services behind the repository port
pub type AppCommandService = CommandService<dyn ProductRepository>;
pub type AppQueryService = QueryService<dyn ProductRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub command_service: Arc<AppCommandService>,
    pub query_service: Arc<AppQueryService>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(
        repo: Arc<dyn ProductRepository>,
        events: Arc<dyn EventSink>,
        config: ServerConfig,
    ) -> Self {
        Self {
            command_service: Arc::new(CommandService::new(repo.clone(), events.clone())),
            query_service: Arc::new(QueryService::new(repo, events)),
            config: Arc::new(config),
        }
    }
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Catalog API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub fn build_router(state: AppState) -> Router {
    // Protected routes (require authentication)
    let admin_routes = routes::product::admin_router().layer(middleware::from_fn_with_state(
        state.clone(),
        auth::admin_auth_middleware,
    ));
    let service_routes = routes::product::service_router().layer(
        middleware::from_fn_with_state(state.clone(), auth::service_auth_middleware),
    );

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(admin_routes)
        .merge(service_routes)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            request_context::request_context,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("Catalog API initializing...");

    let config = ServerConfig::from_secrets(&secrets)?;
    match (&config.api_key, &config.service_api_key) {
        (None, None) => {
            tracing::warn!("No CATALOG_API_KEY set - authentication disabled")
        }
        (None, Some(_)) => {
            tracing::warn!("Only CATALOG_SERVICE_API_KEY set - admin routes are locked")
        }
        (Some(_), service) => tracing::info!(
            service_key = service.is_some(),
            "API key authentication enabled"
        ),
    }
    match config.request_timeout {
        Some(timeout) => {
            tracing::info!(timeout_ms = timeout.as_millis() as u64, "Request deadline enabled")
        }
        None => tracing::warn!("REQUEST_TIMEOUT_MS=0 - request deadline disabled"),
    }

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Database migrations completed");

    // Initialize application services
    let repo: Arc<dyn ProductRepository> = Arc::new(PgProductRepository::new(pool));
    let events: Arc<dyn EventSink> = Arc::new(TracingEventSink);
    let state = AppState::new(repo, events, config);

    let router = build_router(state);

    tracing::info!("Swagger UI: /swagger-ui");
    tracing::info!("Catalog API ready");

    Ok(router.into())
}
