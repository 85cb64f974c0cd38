// apps/product_api/src/errors.rs

use actix_web::http::{header, StatusCode};
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use product_catalog::CatalogError;

#[derive(Debug, Error)]
pub enum AppError {
  /// Malformed body, wrong field type or non-integer path id.
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Catalog Storage Error: {source}")]
  Catalog {
    #[from]
    source: CatalogError,
  },
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Config(_) | AppError::Sqlx(_) | AppError::Catalog { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    match self {
      AppError::Validation(_) | AppError::NotFound(_) => {
        tracing::warn!(application_error = %self, "Responding with client error");
      }
      _ => tracing::error!(application_error = %self, "Responding with error"),
    }

    let body = match self {
      AppError::Validation(m) => json!({"error": "Invalid request", "detail": m}),
      AppError::NotFound(m) => json!({"error": m}),
      AppError::Config(m) => json!({"error": "Configuration issue", "detail": m}),
      AppError::Sqlx(_) => json!({"error": "Database operation failed"}),
      AppError::Catalog { source } => {
        tracing::error!(catalog_error_source = ?source, "Catalog error details");
        json!({"error": "Database operation failed"})
      }
    };
    // Browsers only expose the error body to cross-origin callers with this header.
    HttpResponse::build(self.status_code())
      .insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
      .json(body)
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::body::to_bytes;

  async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.error_response();
    let status = response.status();
    assert_eq!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
    let bytes = to_bytes(response.into_body()).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
  }

  #[actix_rt::test]
  async fn validation_maps_to_bad_request() {
    let (status, body) = body_json(AppError::Validation("expected integer id".to_string())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request");
    assert_eq!(body["detail"], "expected integer id");
  }

  #[actix_rt::test]
  async fn catalog_failure_hides_driver_detail() {
    let source = CatalogError::backend(
      "select_one",
      std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "password authentication failed"),
    );
    let (status, body) = body_json(AppError::from(source)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Database operation failed"}));
  }

  #[actix_rt::test]
  async fn not_found_maps_to_404() {
    let (status, body) = body_json(AppError::NotFound("Product with ID 7 not found.".to_string())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Product with ID 7 not found.");
  }
}
