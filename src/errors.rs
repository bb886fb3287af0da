// src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Application error taxonomy.
///
/// Every failure a request can hit is one of these variants, raised explicitly
/// by the validation step or service that detects it. The HTTP boundary switches
/// on the variant to pick a status code; response codes are never inferred from
/// message text. Backend failures (`Sqlx`, `Internal`) are logged with full
/// detail server-side and surfaced to the client with a generic message.
#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Invalid Selection: {0}")]
  InvalidSelection(String),

  #[error("Unauthorized: {0}")]
  Unauthorized(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Items Unavailable: {0}")]
  ItemsUnavailable(String),

  #[error("Duplicate Order: {0}")]
  DuplicateOrder(String),

  #[error("Duplicate User: {0}")]
  DuplicateUser(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response.
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Validation(m) => HttpResponse::BadRequest().json(json!({ "error": m })),
      AppError::InvalidSelection(m) => HttpResponse::BadRequest().json(json!({ "error": m })),
      AppError::Unauthorized(m) => HttpResponse::Unauthorized().json(json!({ "error": m })),
      AppError::NotFound(m) => HttpResponse::NotFound().json(json!({ "error": m })),
      AppError::ItemsUnavailable(m) => HttpResponse::NotFound().json(json!({ "error": m })),
      AppError::DuplicateOrder(m) => HttpResponse::Conflict().json(json!({ "error": m })),
      AppError::DuplicateUser(m) => HttpResponse::Conflict().json(json!({ "error": m })),
      AppError::Config(m) => {
        HttpResponse::InternalServerError().json(json!({ "error": "Configuration issue", "detail": m }))
      }
      // Never leak database detail to the client.
      AppError::Sqlx(_) => HttpResponse::InternalServerError().json(json!({ "error": "Database operation failed" })),
      AppError::Internal(_) => {
        HttpResponse::InternalServerError().json(json!({ "error": "An internal error occurred" }))
      }
    }
  }
}

/// `true` when a sqlx error is a unique-constraint violation reported by the
/// database, used to map order/user inserts onto the 409 variants.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
  match err {
    sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
    _ => false,
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::http::StatusCode;

  fn status_of(err: AppError) -> StatusCode {
    err.error_response().status()
  }

  #[test]
  fn error_variants_map_to_expected_status_codes() {
    assert_eq!(status_of(AppError::Validation("v".into())), StatusCode::BAD_REQUEST);
    assert_eq!(status_of(AppError::InvalidSelection("i".into())), StatusCode::BAD_REQUEST);
    assert_eq!(status_of(AppError::Unauthorized("u".into())), StatusCode::UNAUTHORIZED);
    assert_eq!(status_of(AppError::NotFound("n".into())), StatusCode::NOT_FOUND);
    assert_eq!(status_of(AppError::ItemsUnavailable("m".into())), StatusCode::NOT_FOUND);
    assert_eq!(status_of(AppError::DuplicateOrder("d".into())), StatusCode::CONFLICT);
    assert_eq!(status_of(AppError::DuplicateUser("d".into())), StatusCode::CONFLICT);
    assert_eq!(status_of(AppError::Config("c".into())), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(status_of(AppError::Sqlx(sqlx::Error::RowNotFound)), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(status_of(AppError::Internal("x".into())), StatusCode::INTERNAL_SERVER_ERROR);
  }

  #[actix_web::test]
  async fn database_errors_respond_with_a_sanitized_body() {
    let response = AppError::Sqlx(sqlx::Error::RowNotFound).error_response();
    let body = actix_web::body::to_bytes(response.into_body()).await.expect("body");
    let value: serde_json::Value = serde_json::from_slice(&body).expect("json body");
    assert_eq!(value["error"], "Database operation failed");
    assert!(value.get("detail").is_none());
  }
}
