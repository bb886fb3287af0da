// src/models/meal.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A catalog entry a user may order. Prices are stored as integer cents to
/// avoid floating-point money arithmetic.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Meal {
  pub id: Uuid,
  pub name: String,
  pub description: Option<String>,
  pub price_cents: i32,
  pub category: String,
  pub image_url: String,
  pub is_available: bool,
  pub created_at: DateTime<Utc>,
}
