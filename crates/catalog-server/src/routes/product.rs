//! Product Routes
//!
//! HTTP handlers that delegate to the Command/Query services. Each handler
//! maps [`catalog::ServiceError`] to its fixed wire code via [`ApiError`].

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};

use catalog::RequestContext;

use crate::extract::ApiJson;
use crate::models::{
    ActiveProductsResponse, ApiError, CreateProductRequest, CreateProductResponse,
    ErrorResponse, ProductIdRequest, ProductsResponse, UpdateProductRequest,
};
use crate::AppState;

/// Create a new product (starts as draft)
#[utoipa::path(
    post,
    path = "/admin/create-product",
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Product created", body = CreateProductResponse),
        (status = 400, description = "invalid_request, invalid_product_data or product_already_exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Product"
)]
pub async fn create_product(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    ApiJson(payload): ApiJson<CreateProductRequest>,
) -> Result<Json<CreateProductResponse>, ApiError> {
    let id = state
        .command_service
        .create_product(
            &ctx,
            &payload.name,
            &payload.description,
            payload.net_price_cents,
            &payload.category,
        )
        .await?;

    Ok(Json(CreateProductResponse { id }))
}

/// Update name, description, price and category of a product
#[utoipa::path(
    post,
    path = "/admin/update-product",
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated"),
        (status = 400, description = "invalid_request, invalid_product_data or product_not_found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Product"
)]
pub async fn update_product(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    ApiJson(payload): ApiJson<UpdateProductRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .command_service
        .update_product(
            &ctx,
            payload.id,
            &payload.name,
            &payload.description,
            payload.net_price_cents,
            &payload.category,
        )
        .await?;

    Ok(StatusCode::OK)
}

/// Activate a product
#[utoipa::path(
    post,
    path = "/admin/activate-product",
    request_body = ProductIdRequest,
    responses(
        (status = 200, description = "Product activated"),
        (status = 400, description = "invalid_request or product_not_found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Product"
)]
pub async fn activate_product(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    ApiJson(payload): ApiJson<ProductIdRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .command_service
        .activate_product(&ctx, payload.id)
        .await?;

    Ok(StatusCode::OK)
}

/// Deactivate a product
#[utoipa::path(
    post,
    path = "/admin/deactivate-product",
    request_body = ProductIdRequest,
    responses(
        (status = 200, description = "Product deactivated"),
        (status = 400, description = "invalid_request or product_not_found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Product"
)]
pub async fn deactivate_product(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    ApiJson(payload): ApiJson<ProductIdRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .command_service
        .deactivate_product(&ctx, payload.id)
        .await?;

    Ok(StatusCode::OK)
}

/// List all products regardless of status
#[utoipa::path(
    get,
    path = "/admin/get-all-products",
    responses(
        (status = 200, description = "All products", body = ProductsResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Product"
)]
pub async fn get_all_products(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> Result<Json<ProductsResponse>, ApiError> {
    let products = state.query_service.get_all_products(&ctx).await?;

    Ok(Json(ProductsResponse {
        products: products.into_iter().map(Into::into).collect(),
    }))
}

/// List active products (without status)
#[utoipa::path(
    get,
    path = "/service/get-active-products",
    responses(
        (status = 200, description = "Active products", body = ActiveProductsResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Product"
)]
pub async fn get_active_products(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> Result<Json<ActiveProductsResponse>, ApiError> {
    let products = state.query_service.get_active_products(&ctx).await?;

    Ok(Json(ActiveProductsResponse {
        products: products.into_iter().map(Into::into).collect(),
    }))
}

/// Product management for administrators
pub fn admin_router() -> Router<AppState> {
    Router::new()
        // Commands
        .route("/admin/create-product", post(create_product))
        .route("/admin/update-product", post(update_product))
        .route("/admin/activate-product", post(activate_product))
        .route("/admin/deactivate-product", post(deactivate_product))
        // Queries
        .route("/admin/get-all-products", get(get_all_products))
}

/// Listings for service staff
pub fn service_router() -> Router<AppState> {
    Router::new().route("/service/get-active-products", get(get_active_products))
}
