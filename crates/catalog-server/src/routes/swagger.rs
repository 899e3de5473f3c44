//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    ActiveProductResponse, ActiveProductsResponse, CreateProductRequest, CreateProductResponse,
    ErrorResponse, ProductIdRequest, ProductResponse, ProductsResponse, UpdateProductRequest,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Commands
        super::product::create_product,
        super::product::update_product,
        super::product::activate_product,
        super::product::deactivate_product,
        // Queries
        super::product::get_all_products,
        super::product::get_active_products,
    ),
    components(schemas(
        CreateProductRequest,
        CreateProductResponse,
        UpdateProductRequest,
        ProductIdRequest,
        ProductResponse,
        ProductsResponse,
        ActiveProductResponse,
        ActiveProductsResponse,
        ErrorResponse,
    )),
    tags(
        (name = "Product", description = "Product catalog management and listings")
    ),
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "Product catalog for administrators and service staff"
    )
)]
pub struct ApiDoc;
