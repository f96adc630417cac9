//! Error types for authentication and account management.

use thiserror::Error;
use warung_store::error::StoreError;

/// The primary error type for auth operations.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Malformed or missing required input. The caller's fault; never
    /// retried.
    #[error("invalid request: {0}")]
    Validation(String),

    /// Credential or tenant mismatch.
    ///
    /// Carries no detail: a nonexistent code, a username mismatch, and a
    /// wrong password all produce this same value, so the response cannot
    /// be used to enumerate accounts.
    #[error("unauthorized")]
    Unauthorized,

    /// The hashing primitive failed (not a mere mismatch).
    #[error("password hashing failed: {0}")]
    Hashing(String),

    /// A document store call failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type alias for auth operations.
pub type AuthResult<T> = Result<T, AuthError>;
