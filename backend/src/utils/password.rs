//! Password hashing with Argon2id.
//!
//! Hashes are PHC strings carrying their own salt and parameters, so two
//! hashes of the same password never compare equal. The async wrappers move
//! the work onto the blocking pool.

use crate::errors::{ServiceError, ServiceResult};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use rand::rngs::OsRng;
use std::sync::LazyLock;
use tracing::warn;

/// Hash a plain text password.
pub fn hash_password(password: &str) -> ServiceResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ServiceError::internal_error(format!("Password hashing failed: {}", e)))
}

/// Check a plain text password against a stored hash.
///
/// A hash that cannot be parsed never verifies.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let parsed = match PasswordHash::new(hash) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("Stored password hash is malformed: {}", e);
            return false;
        }
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("dummy-password-for-timing").ok());

/// Builds the throwaway hash ahead of the first signin.
pub fn init_dummy_hash() {
    if DUMMY_HASH.is_none() {
        warn!("Could not build the dummy password hash");
    }
}

/// Verifies against a throwaway hash and always fails.
///
/// Used when no account matches, so that path costs one verification too.
pub fn verify_against_dummy(password: &str) -> bool {
    if let Some(hash) = DUMMY_HASH.as_deref() {
        verify_password(password, hash);
    }
    false
}

pub async fn hash_password_blocking(password: String) -> ServiceResult<String> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| ServiceError::internal_error(format!("Hashing task failed: {}", e)))?
}

/// Runs the verification on the blocking pool. `None` checks the dummy hash.
pub async fn verify_password_blocking(
    password: String,
    hash: Option<String>,
) -> ServiceResult<bool> {
    tokio::task::spawn_blocking(move || match hash {
        Some(hash) => verify_password(&password, &hash),
        None => verify_against_dummy(&password),
    })
    .await
    .map_err(|e| ServiceError::internal_error(format!("Verification task failed: {}", e)))
}
