//! Password hashing and verification.
//!
//! Credentials are stored as salted bcrypt digests. Hashing and verification
//! are CPU-bound by design, so both run on the blocking thread pool — a slow
//! hash must never stall unrelated requests on the async runtime.

use bcrypt::{hash, verify};
use tokio::task;

use crate::error::{AuthError, AuthResult};

/// Bcrypt cost factor for password hashing.
pub const HASH_COST: u32 = 10;

/// Hashes a plaintext password.
///
/// Each call salts independently, so hashing the same password twice
/// produces different digests.
///
/// # Errors
///
/// Returns [`AuthError::Hashing`] if bcrypt fails.
pub async fn hash_password(password: &str) -> AuthResult<String> {
    let password = password.to_string();

    task::spawn_blocking(move || {
        hash(password, HASH_COST).map_err(|e| AuthError::Hashing(e.to_string()))
    })
    .await
    .map_err(|e| AuthError::Hashing(format!("task join error: {}", e)))?
}

/// Verifies a plaintext password against a stored digest.
///
/// A mismatch is `Ok(false)`, not an error. Only a malformed digest or a
/// failing primitive produces [`AuthError::Hashing`].
pub async fn verify_password(password: &str, digest: &str) -> AuthResult<bool> {
    let password = password.to_string();
    let digest = digest.to_string();

    task::spawn_blocking(move || {
        verify(password, &digest).map_err(|e| AuthError::Hashing(e.to_string()))
    })
    .await
    .map_err(|e| AuthError::Hashing(format!("task join error: {}", e)))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_then_verify_roundtrip() {
        let digest = hash_password("rahasia123").await.unwrap();
        assert!(verify_password("rahasia123", &digest).await.unwrap());
    }

    #[tokio::test]
    async fn test_wrong_password_is_false_not_error() {
        let digest = hash_password("rahasia123").await.unwrap();
        assert!(!verify_password("salah", &digest).await.unwrap());
    }

    #[tokio::test]
    async fn test_same_password_hashes_differently() {
        let a = hash_password("rahasia123").await.unwrap();
        let b = hash_password("rahasia123").await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_malformed_digest_is_error() {
        let result = verify_password("rahasia123", "not-a-bcrypt-digest").await;
        assert!(matches!(result, Err(AuthError::Hashing(_))));
    }
}
