// core/src/password.rs

//! Argon2 password hashing and verification.

use crate::error::{CoreError, CoreResult};
use argon2::{
  password_hash::{
    rand_core::OsRng, // For generating random salts
    PasswordHash,
    PasswordHasher,
    PasswordVerifier,
    SaltString,
  },
  Argon2,
};
use tracing::{debug, error, instrument};

/// Hashes a plain-text password with Argon2 (default parameters) and returns the PHC string.
#[instrument(name = "password::hash_password", skip(password), err(Display))]
pub fn hash_password(password: &str) -> CoreResult<String> {
  let salt = SaltString::generate(&mut OsRng);

  match Argon2::default().hash_password(password.as_bytes(), &salt) {
    Ok(hash) => {
      debug!("Password hashed.");
      Ok(hash.to_string())
    }
    Err(argon_err) => {
      error!(error = %argon_err, "Argon2 password hashing failed.");
      Err(CoreError::PasswordHash(argon_err.to_string()))
    }
  }
}

/// Verifies `candidate` against a stored PHC hash.
///
/// Returns `Ok(false)` on a mismatch and `Err` only when the stored hash cannot be parsed
/// or Argon2 itself fails.
#[instrument(
  name = "password::verify_password",
  skip(stored_hash, candidate),
  fields(hash_len = stored_hash.len()),
  err(Display)
)]
pub fn verify_password(stored_hash: &str, candidate: &str) -> CoreResult<bool> {
  let parsed_hash = PasswordHash::new(stored_hash).map_err(|parse_err| {
    error!(error = %parse_err, "Stored password hash is malformed.");
    CoreError::PasswordHash(format!("Invalid stored password hash: {}", parse_err))
  })?;

  match Argon2::default().verify_password(candidate.as_bytes(), &parsed_hash) {
    Ok(()) => Ok(true),
    Err(argon2::password_hash::Error::Password) => {
      debug!("Password mismatch.");
      Ok(false)
    }
    Err(other) => {
      error!(error = %other, "Argon2 verification failed.");
      Err(CoreError::PasswordHash(other.to_string()))
    }
  }
}
