// src/services/session_service.rs

//! Session issuance and verification: HS256-signed JWT bearer tokens with a
//! 30-day validity window. The rest of the application treats a decoded token
//! as an opaque identity (user id, email, display name).

use crate::errors::{AppError, Result};
use crate::models::User;
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::{error, instrument, warn};
use uuid::Uuid;

/// Sessions stay valid for 30 days.
pub const SESSION_TTL_SECONDS: i64 = 30 * 24 * 60 * 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
  /// The authenticated user's id.
  pub sub: Uuid,
  pub email: String,
  pub name: String,
  pub iat: i64,
  pub exp: i64,
}

/// Issues a signed session token for a verified user.
#[instrument(name = "session_service::issue_session_token", skip(secret, user), fields(user_id = %user.id))]
pub fn issue_session_token(secret: &str, user: &User) -> Result<String> {
  let now = Utc::now().timestamp();
  let claims = SessionClaims {
    sub: user.id,
    email: user.email.clone(),
    name: user.name.clone(),
    iat: now,
    exp: now + SESSION_TTL_SECONDS,
  };

  encode(&Header::new(Algorithm::HS256), &claims, &EncodingKey::from_secret(secret.as_bytes())).map_err(|e| {
    error!(error = %e, "Failed to sign session token.");
    AppError::Internal("Session token issuance failed.".to_string())
  })
}

/// Verifies a bearer token and returns its claims. Any signature, structure,
/// or expiry problem collapses into a single `Unauthorized` answer.
#[instrument(name = "session_service::verify_session_token", skip(secret, token))]
pub fn verify_session_token(secret: &str, token: &str) -> Result<SessionClaims> {
  let validation = Validation::new(Algorithm::HS256);

  decode::<SessionClaims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
    .map(|data| data.claims)
    .map_err(|e| {
      warn!(error = %e, "Session token rejected.");
      AppError::Unauthorized("Invalid or expired session token.".to_string())
    })
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::Utc;

  const SECRET: &str = "unit-test-session-secret";

  fn sample_user() -> User {
    let now = Utc::now();
    User {
      id: Uuid::new_v4(),
      name: "Jamie Doe".to_string(),
      email: "jamie@example.com".to_string(),
      password_hash: "$argon2id$irrelevant".to_string(),
      created_at: now,
      updated_at: now,
    }
  }

  #[test]
  fn issued_token_verifies_and_carries_identity() {
    let user = sample_user();
    let token = issue_session_token(SECRET, &user).expect("token should be issued");

    let claims = verify_session_token(SECRET, &token).expect("token should verify");
    assert_eq!(claims.sub, user.id);
    assert_eq!(claims.email, user.email);
    assert_eq!(claims.name, user.name);
    assert!(claims.exp - claims.iat == SESSION_TTL_SECONDS);
  }

  #[test]
  fn token_signed_with_other_secret_is_rejected() {
    let token = issue_session_token("some-other-secret", &sample_user()).expect("token should be issued");
    assert!(matches!(
      verify_session_token(SECRET, &token),
      Err(AppError::Unauthorized(_))
    ));
  }

  #[test]
  fn tampered_token_is_rejected() {
    let token = issue_session_token(SECRET, &sample_user()).expect("token should be issued");
    let tampered = format!("{}x", token);
    assert!(matches!(
      verify_session_token(SECRET, &tampered),
      Err(AppError::Unauthorized(_))
    ));
  }

  #[test]
  fn expired_token_is_rejected() {
    // Hand-roll claims whose exp is well past the default decoding leeway.
    let now = Utc::now().timestamp();
    let claims = SessionClaims {
      sub: Uuid::new_v4(),
      email: "expired@example.com".to_string(),
      name: "Expired".to_string(),
      iat: now - SESSION_TTL_SECONDS,
      exp: now - 3600,
    };
    let token = encode(
      &Header::new(Algorithm::HS256),
      &claims,
      &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .expect("token should encode");

    assert!(matches!(
      verify_session_token(SECRET, &token),
      Err(AppError::Unauthorized(_))
    ));
  }
}
