// src/web/extractors.rs

use actix_web::{http::header, web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use tracing::{error, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::services::session_service;
use crate::state::AppState;

/// The authenticated principal for the current request, decoded from the
/// `Authorization: Bearer <token>` header. Handlers that take this extractor
/// short-circuit with 401 before any business logic or storage access runs.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
  pub user_id: Uuid,
  pub email: String,
  pub name: String,
}

impl FromRequest for AuthenticatedUser {
  type Error = AppError;
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
    ready(extract_authenticated_user(req))
  }
}

fn extract_authenticated_user(req: &HttpRequest) -> Result<AuthenticatedUser, AppError> {
  let Some(app_state) = req.app_data::<web::Data<AppState>>() else {
    error!("AuthenticatedUser extractor used without AppState configured.");
    return Err(AppError::Internal("Application state is not configured.".to_string()));
  };

  let header_value = req
    .headers()
    .get(header::AUTHORIZATION)
    .and_then(|value| value.to_str().ok())
    .ok_or_else(|| {
      warn!("Missing or unreadable Authorization header.");
      AppError::Unauthorized("Please log in to continue.".to_string())
    })?;

  let token = header_value.strip_prefix("Bearer ").ok_or_else(|| {
    warn!("Authorization header is not a bearer token.");
    AppError::Unauthorized("Please log in to continue.".to_string())
  })?;

  let claims = session_service::verify_session_token(&app_state.config.session_secret, token)?;

  Ok(AuthenticatedUser {
    user_id: claims.sub,
    email: claims.email,
    name: claims.name,
  })
}
