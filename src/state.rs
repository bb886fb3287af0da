// src/state.rs

use crate::config::AppConfig;
use sqlx::PgPool;
use std::sync::Arc;

/// Shared per-process state, constructed once in `main` and handed to every
/// handler through `actix_web::web::Data`. Services receive the pool and config
/// explicitly; there are no module-level storage handles.
#[derive(Clone)]
pub struct AppState {
  pub db_pool: PgPool,
  pub config: Arc<AppConfig>,
}
