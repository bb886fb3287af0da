// src/web/handlers/meal_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::services::catalog_service;
use crate::state::AppState;

#[instrument(name = "handler::list_meals", skip(app_state))]
pub async fn list_meals_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let meals = catalog_service::list_available_meals(&app_state.db_pool).await?;

  info!("Successfully fetched {} available meals.", meals.len());

  Ok(HttpResponse::Ok().json(json!({
      "message": "Meals fetched successfully.",
      "meals": meals
  })))
}

#[instrument(name = "handler::get_meal", skip(app_state, path), fields(meal_id = %path.as_ref()))]
pub async fn get_meal_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let meal_id = path.into_inner();
  let meal = catalog_service::get_meal(&app_state.db_pool, meal_id).await?;

  Ok(HttpResponse::Ok().json(json!({
      "message": "Meal fetched successfully.",
      "meal": meal
  })))
}
