//! Product DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use catalog::Product;

// ============================================
// Request DTOs
// ============================================

/// Create product request
///
/// `category` is kept as a raw tag so that unknown values are reported as
/// `invalid_product_data` rather than a decoding error.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub net_price_cents: i64,
    #[schema(example = "food")]
    pub category: String,
}

/// Create product response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateProductResponse {
    pub id: i64,
}

/// Update product request
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateProductRequest {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub net_price_cents: i64,
    #[schema(example = "beverage")]
    pub category: String,
}

/// Activate/deactivate product request
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ProductIdRequest {
    pub id: i64,
}

// ============================================
// Response DTOs
// ============================================

/// Full product record
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub net_price_cents: i64,
    #[schema(example = "food")]
    pub category: String,
    #[schema(example = "draft")]
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            net_price_cents: product.net_price_cents,
            category: product.category.to_string(),
            status: product.status.to_string(),
            created_at: product.created_at,
        }
    }
}

/// Product as listed for service (no status)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActiveProductResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub net_price_cents: i64,
    #[schema(example = "food")]
    pub category: String,
}

impl From<Product> for ActiveProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            net_price_cents: product.net_price_cents,
            category: product.category.to_string(),
        }
    }
}

/// List of all products
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductsResponse {
    pub products: Vec<ProductResponse>,
}

/// List of active products
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ActiveProductsResponse {
    pub products: Vec<ActiveProductResponse>,
}
