// src/models/order.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, Type as SqlxType};
use uuid::Uuid;

/// Order lifecycle status. Orders are created as `Pending` and are never
/// transitioned by this service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, SqlxType)]
#[sqlx(type_name = "order_status_enum", rename_all = "lowercase")]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
  Pending,
  Completed,
  Cancelled,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Order {
  pub id: Uuid,
  pub user_id: Uuid,
  /// Sum of the referenced meals' prices at creation time.
  pub total_price_cents: i32,
  pub status: OrderStatus,
  pub created_at: DateTime<Utc>,
}
