//! Catalog API Client

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use reqwest::{Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// API Client for the catalog server
pub struct CatalogClient {
    client: Client,
    base_url: String,
    api_key: String,
}

// ============================================
// API Types
// ============================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub net_price_cents: i64,
    pub category: String,
    /// Absent in the active listing
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct ProductsResponse {
    products: Vec<Product>,
}

#[derive(Debug, Deserialize)]
struct CreateProductResponse {
    id: i64,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: String,
    message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetails {
    pub name: String,
    pub description: String,
    pub net_price_cents: i64,
    pub category: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateProductRequest<'a> {
    id: i64,
    #[serde(flatten)]
    details: &'a ProductDetails,
}

#[derive(Debug, Serialize)]
struct ProductIdRequest {
    id: i64,
}

/// Render a failed response body, preferring the server's error code
fn describe_error(status: reqwest::StatusCode, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(err) => format!("{} ({}): {}", err.code, status, err.message),
        Err(_) if body.trim().is_empty() => format!("API error ({})", status),
        Err(_) => format!("API error ({}): {}", status, body.trim()),
    }
}

impl CatalogClient {
    /// Create a new API client
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .bearer_auth(&self.api_key)
    }

    fn post<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> RequestBuilder {
        self.client
            .post(format!("{}{}", self.base_url, path))
            .bearer_auth(&self.api_key)
            .json(body)
    }

    async fn send(request: RequestBuilder) -> Result<Response> {
        let resp = request
            .send()
            .await
            .context("Failed to connect to catalog API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!(describe_error(status, &body));
        }

        Ok(resp)
    }

    async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
        Self::send(request)
            .await?
            .json()
            .await
            .context("Failed to parse response")
    }

    /// List products; `active_only` uses the service-staff listing
    pub async fn list_products(&self, active_only: bool) -> Result<Vec<Product>> {
        let path = if active_only {
            "/service/get-active-products"
        } else {
            "/admin/get-all-products"
        };

        let resp: ProductsResponse = Self::send_json(self.get(path)).await?;
        Ok(resp.products)
    }

    /// Create a product and return its ID
    pub async fn create_product(&self, details: &ProductDetails) -> Result<i64> {
        let resp: CreateProductResponse =
            Self::send_json(self.post("/admin/create-product", details)).await?;
        Ok(resp.id)
    }

    pub async fn update_product(&self, id: i64, details: &ProductDetails) -> Result<()> {
        let request = UpdateProductRequest { id, details };
        Self::send(self.post("/admin/update-product", &request)).await?;
        Ok(())
    }

    pub async fn activate_product(&self, id: i64) -> Result<()> {
        Self::send(self.post("/admin/activate-product", &ProductIdRequest { id })).await?;
        Ok(())
    }

    pub async fn deactivate_product(&self, id: i64) -> Result<()> {
        Self::send(self.post("/admin/deactivate-product", &ProductIdRequest { id })).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_describe_error_uses_code() {
        let body = r#"{"code":"product_not_found","message":"Product not found"}"#;
        assert_eq!(
            describe_error(StatusCode::BAD_REQUEST, body),
            "product_not_found (400 Bad Request): Product not found"
        );
    }

    #[test]
    fn test_describe_error_falls_back_to_body() {
        assert_eq!(
            describe_error(StatusCode::BAD_GATEWAY, "upstream down\n"),
            "API error (502 Bad Gateway): upstream down"
        );
        assert_eq!(
            describe_error(StatusCode::INTERNAL_SERVER_ERROR, ""),
            "API error (500 Internal Server Error)"
        );
    }

    #[test]
    fn test_update_request_is_flat() {
        let details = ProductDetails {
            name: "Fries".to_string(),
            description: String::new(),
            net_price_cents: 100,
            category: "food".to_string(),
        };
        let value = serde_json::to_value(UpdateProductRequest {
            id: 7,
            details: &details,
        })
        .unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "id": 7,
                "name": "Fries",
                "description": "",
                "netPriceCents": 100,
                "category": "food",
            })
        );
    }

    #[test]
    fn test_active_listing_parses_without_status() {
        let body = r#"{"products":[{"id":1,"name":"Fries","description":"","netPriceCents":1999,"category":"food"}]}"#;
        let resp: ProductsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.products[0].id, 1);
        assert_eq!(resp.products[0].status, None);
    }
}
