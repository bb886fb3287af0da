// src/web/handlers/auth_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::services::{auth_service, session_service};
use crate::state::AppState;

// --- Request DTOs ---

#[derive(Deserialize, Debug)]
pub struct SignupRequestPayload {
  pub name: String,
  pub email: String,
  pub password: String,
}

#[derive(Deserialize, Debug)]
pub struct SigninRequestPayload {
  pub email: String,
  pub password: String,
}

fn validate_email(email: &str) -> Result<(), AppError> {
  if email.is_empty() || !email.contains('@') {
    warn!("Invalid email format provided.");
    return Err(AppError::Validation("Valid email is required.".to_string()));
  }
  Ok(())
}

// --- Handler Implementations ---

#[instrument(
    name = "handler::signup",
    skip(app_state, req_payload),
    fields(req_email = %req_payload.email)
)]
pub async fn signup_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<SignupRequestPayload>,
) -> Result<HttpResponse, AppError> {
  info!("Signup attempt for email: {}", req_payload.email);

  validate_email(&req_payload.email)?;
  if req_payload.name.trim().is_empty() {
    return Err(AppError::Validation("Name is required.".to_string()));
  }
  if req_payload.password.len() < 8 {
    return Err(AppError::Validation(
      "Password must be at least 8 characters long.".to_string(),
    ));
  }

  let user = auth_service::create_user(
    &app_state.db_pool,
    req_payload.name.trim(),
    &req_payload.email,
    &req_payload.password,
  )
  .await?;

  info!("Signup successful for email: {}. User ID: {}", user.email, user.id);

  Ok(HttpResponse::Created().json(json!({
      "message": "User created successfully.",
      "user_id": user.id.to_string(),
      "email": user.email,
  })))
}

#[instrument(
    name = "handler::signin",
    skip(app_state, req_payload),
    fields(req_email = %req_payload.email)
)]
pub async fn signin_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<SigninRequestPayload>,
) -> Result<HttpResponse, AppError> {
  info!("Signin attempt for email: {}", req_payload.email);

  validate_email(&req_payload.email)?;
  if req_payload.password.is_empty() {
    return Err(AppError::Validation("Password is required.".to_string()));
  }

  let user = auth_service::verify_credentials(&app_state.db_pool, &req_payload.email, &req_payload.password).await?;
  let token = session_service::issue_session_token(&app_state.config.session_secret, &user)?;

  info!("Signin successful for email: {}. User ID: {}", user.email, user.id);

  Ok(HttpResponse::Ok().json(json!({
      "message": "Signin successful.",
      "token": token,
      "user_id": user.id.to_string(),
      "email": user.email,
      "name": user.name,
  })))
}
