// src/services/catalog_service.rs

//! Read-only meal catalog access.

use crate::errors::{AppError, Result};
use crate::models::Meal;
use sqlx::PgPool;
use tracing::{error, instrument, warn};
use uuid::Uuid;

pub(crate) const MEAL_COLUMNS: &str = "id, name, description, price_cents, category, image_url, is_available, created_at";

/// Lists every meal currently offered, newest first. Only meals with the
/// availability flag set are returned.
#[instrument(name = "catalog_service::list_available_meals", skip(pool))]
pub async fn list_available_meals(pool: &PgPool) -> Result<Vec<Meal>> {
  let query = format!("SELECT {MEAL_COLUMNS} FROM meals WHERE is_available = TRUE ORDER BY created_at DESC");

  sqlx::query_as(&query).fetch_all(pool).await.map_err(|e| {
    error!(error = %e, "Failed to fetch meals from database.");
    AppError::Sqlx(e)
  })
}

/// Fetches a single meal by id, available or not.
#[instrument(name = "catalog_service::get_meal", skip(pool), fields(meal_id = %meal_id))]
pub async fn get_meal(pool: &PgPool, meal_id: Uuid) -> Result<Meal> {
  let query = format!("SELECT {MEAL_COLUMNS} FROM meals WHERE id = $1");

  let meal: Option<Meal> = sqlx::query_as(&query).bind(meal_id).fetch_optional(pool).await.map_err(|e| {
    error!(error = %e, "Database error while fetching meal.");
    AppError::Sqlx(e)
  })?;

  meal.ok_or_else(|| {
    warn!("Meal not found.");
    AppError::NotFound(format!("Meal with ID {} not found.", meal_id))
  })
}
