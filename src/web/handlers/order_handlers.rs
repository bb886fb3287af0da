// src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::services::order_service;
use crate::state::AppState;
use crate::web::extractors::AuthenticatedUser;

// --- Request DTO ---

#[derive(Deserialize, Debug)]
pub struct PlaceOrderRequestPayload {
  pub meal_ids: Vec<String>,
}

// --- Handler Implementations ---

#[instrument(
    name = "handler::place_order",
    skip(app_state, req_payload, auth_user),
    fields(user_id = %auth_user.user_id, requested = req_payload.meal_ids.len())
)]
pub async fn place_order_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<PlaceOrderRequestPayload>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  info!(
    "Order placement attempt by user: {} with {} meal id(s).",
    auth_user.user_id,
    req_payload.meal_ids.len()
  );

  let placed = order_service::place_order(&app_state.db_pool, auth_user.user_id, &req_payload.meal_ids).await?;

  Ok(HttpResponse::Created().json(json!({
      "message": "Order placed successfully.",
      "order": placed
  })))
}

#[instrument(
    name = "handler::list_orders",
    skip(app_state, auth_user),
    fields(user_id = %auth_user.user_id)
)]
pub async fn list_orders_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let orders = order_service::list_orders(&app_state.db_pool, auth_user.user_id).await?;

  info!(
    "Fetched {} order(s) for user: {}.",
    orders.len(),
    auth_user.user_id
  );

  Ok(HttpResponse::Ok().json(json!({
      "message": "Orders fetched successfully.",
      "orders": orders
  })))
}
