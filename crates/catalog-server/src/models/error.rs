//! Error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use catalog::ServiceError;

/// Error body returned for every failed request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Stable machine-readable code, e.g. `product_not_found`
    pub code: String,
    pub message: String,
}

/// Service error mapped onto HTTP
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: &'static str,
}

impl ApiError {
    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code: "internal_server_error",
            message: "Internal server error",
        }
    }

    /// Body could not be decoded into the request type
    pub fn invalid_request() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code: "invalid_request",
            message: "Invalid request body",
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        let message = match &err {
            ServiceError::InvalidProductData(_) => "Invalid product data",
            ServiceError::ProductAlreadyExists => "Product already exists",
            ServiceError::ProductNotFound => "Product not found",
            // storage details never leave the server
            ServiceError::StorageFailure => return Self::internal(),
        };

        Self {
            status: StatusCode::BAD_REQUEST,
            code: err.code(),
            message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                code: self.code.to_string(),
                message: self.message.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use catalog::ValidationError;

    async fn render(err: ServiceError) -> (StatusCode, ErrorResponse) {
        let response = ApiError::from(err).into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_client_errors_are_bad_requests() {
        let cases = [
            (
                ServiceError::InvalidProductData(ValidationError::EmptyName),
                "invalid_product_data",
            ),
            (ServiceError::ProductAlreadyExists, "product_already_exists"),
            (ServiceError::ProductNotFound, "product_not_found"),
        ];

        for (err, code) in cases {
            let (status, body) = render(err).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body.code, code);
        }
    }

    #[tokio::test]
    async fn test_storage_failure_is_generic_server_error() {
        let (status, body) = render(ServiceError::StorageFailure).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.code, "internal_server_error");
        assert_eq!(body.message, "Internal server error");
    }

    #[tokio::test]
    async fn test_invalid_request_is_bad_request() {
        let response = ApiError::invalid_request().into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.code, "invalid_request");
    }
}
