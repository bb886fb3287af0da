// src/services/auth_service.rs

//! Credential verification: Argon2 password hashing and the lookup of a user
//! by email/password pair.

use crate::errors::{is_unique_violation, AppError, Result};
use crate::models::User;
use argon2::{
  password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
  Argon2,
};
use sqlx::PgPool;
use tracing::{debug, error, instrument, warn};
use uuid::Uuid;

const USER_COLUMNS: &str = "id, name, email, password_hash, created_at, updated_at";

/// Hashes a plain-text password using Argon2 with a random salt.
#[instrument(name = "auth_service::hash_password", skip(password), err(Display))]
pub fn hash_password(password: &str) -> Result<String> {
  if password.is_empty() {
    return Err(AppError::Validation("Password cannot be empty.".to_string()));
  }

  let salt = SaltString::generate(&mut OsRng);
  let argon2_hasher = Argon2::default();

  match argon2_hasher.hash_password(password.as_bytes(), &salt) {
    Ok(password_hash) => Ok(password_hash.to_string()),
    Err(argon_err) => {
      error!(error = %argon_err, "Argon2 password hashing failed.");
      Err(AppError::Internal("Password hashing process failed.".to_string()))
    }
  }
}

/// Verifies a plain-text password against a stored Argon2 hash.
///
/// Returns `Ok(false)` on a plain mismatch; `Err` only when the stored hash is
/// unparseable or verification itself fails.
#[instrument(name = "auth_service::verify_password", skip(stored_hash, provided_password), err(Display))]
pub fn verify_password(stored_hash: &str, provided_password: &str) -> Result<bool> {
  if stored_hash.is_empty() || provided_password.is_empty() {
    return Ok(false);
  }

  let parsed_hash = match PasswordHash::new(stored_hash) {
    Ok(ph) => ph,
    Err(parse_err) => {
      error!(error = %parse_err, "Failed to parse stored password hash string.");
      return Err(AppError::Internal("Invalid stored password hash format.".to_string()));
    }
  };

  match Argon2::default().verify_password(provided_password.as_bytes(), &parsed_hash) {
    Ok(()) => Ok(true),
    Err(argon2::password_hash::Error::Password) => {
      debug!("Password verification failed: passwords do not match.");
      Ok(false)
    }
    Err(other_argon_err) => {
      error!(error = %other_argon_err, "Argon2 password verification process encountered an error.");
      Err(AppError::Internal("Password verification process failed.".to_string()))
    }
  }
}

/// Resolves a user by `(email, password)`.
///
/// Fails with `Unauthorized` on either an unknown email or a wrong password,
/// without distinguishing the two to the caller.
#[instrument(name = "auth_service::verify_credentials", skip(pool, password), fields(email = %email))]
pub async fn verify_credentials(pool: &PgPool, email: &str, password: &str) -> Result<User> {
  let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");
  let user: Option<User> = sqlx::query_as(&query)
    .bind(email)
    .fetch_optional(pool)
    .await
    .map_err(|e| {
      error!(error = %e, "Database error while fetching user by email.");
      AppError::Sqlx(e)
    })?;

  let Some(user) = user else {
    warn!("Sign-in attempt for unknown email.");
    return Err(AppError::Unauthorized("Invalid email or password.".to_string()));
  };

  if verify_password(&user.password_hash, password)? {
    debug!(user_id = %user.id, "Credentials verified.");
    Ok(user)
  } else {
    warn!(user_id = %user.id, "Sign-in attempt with wrong password.");
    Err(AppError::Unauthorized("Invalid email or password.".to_string()))
  }
}

/// Creates a user with a freshly hashed password. A duplicate email surfaces
/// as `DuplicateUser` (unique constraint on `users.email`).
#[instrument(name = "auth_service::create_user", skip(pool, password), fields(email = %email))]
pub async fn create_user(pool: &PgPool, name: &str, email: &str, password: &str) -> Result<User> {
  let password_hash = hash_password(password)?;
  let query = format!("INSERT INTO users (id, name, email, password_hash) VALUES ($1, $2, $3, $4) RETURNING {USER_COLUMNS}");

  sqlx::query_as(&query)
    .bind(Uuid::new_v4())
    .bind(name)
    .bind(email)
    .bind(&password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| {
      if is_unique_violation(&e) {
        warn!("Signup attempt with an already registered email.");
        AppError::DuplicateUser("An account with this email already exists.".to_string())
      } else {
        error!(error = %e, "Database error while creating user.");
        AppError::Sqlx(e)
      }
    })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn hash_then_verify_round_trips() {
    let hash = hash_password("correct horse battery staple").expect("hashing should succeed");
    assert!(hash.starts_with("$argon2"));
    assert!(verify_password(&hash, "correct horse battery staple").expect("verification should run"));
  }

  #[test]
  fn wrong_password_does_not_verify() {
    let hash = hash_password("original password").expect("hashing should succeed");
    assert!(!verify_password(&hash, "guessed password").expect("verification should run"));
  }

  #[test]
  fn empty_password_cannot_be_hashed() {
    assert!(matches!(hash_password(""), Err(AppError::Validation(_))));
  }

  #[test]
  fn garbage_stored_hash_is_an_internal_error() {
    assert!(matches!(
      verify_password("not-a-phc-string", "whatever"),
      Err(AppError::Internal(_))
    ));
  }
}
