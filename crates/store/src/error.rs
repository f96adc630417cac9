//! Error types for the persistence layer.
//!
//! Failures are split into three classes: record state ([`RecordError`]),
//! caller input ([`ValidationError`]), and infrastructure ([`BackendError`]).
//! Blob service failures are a separate type ([`BlobError`]) so callers can
//! distinguish a failed image upload from a failed document operation.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The primary error type for all document store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Record state errors
    #[error(transparent)]
    Record(#[from] RecordError),

    /// Caller input errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Backend-specific errors
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Errors related to record state.
#[derive(Error, Debug)]
pub enum RecordError {
    /// The requested record was not found in the collection.
    #[error("record not found: {collection}/{id}")]
    NotFound { collection: String, id: String },
}

/// Errors related to caller input.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A read was attempted without the store code that scopes it.
    #[error("query is not scoped to a store: {field} is required")]
    MissingScope { field: &'static str },

    /// The supplied record body is not a JSON object.
    #[error("record for {collection} must be a JSON object")]
    NotAnObject { collection: String },
}

/// Errors raised by a storage backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The backend call itself failed (connectivity, I/O, quota).
    #[error("backend '{backend_name}' failure: {message}")]
    Failure {
        backend_name: &'static str,
        message: String,
    },

    /// A persisted record could not be interpreted.
    #[error("corrupt record in {collection}: {message}")]
    Corrupt { collection: String, message: String },
}

/// Result type alias for document store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by the blob storage service.
///
/// Deliberately distinct from [`StoreError`]: a failed upload is reported as
/// its own I/O failure kind, never folded into document-store failures.
#[derive(Error, Debug)]
pub enum BlobError {
    /// The upload did not complete.
    #[error("blob upload failed: {message}")]
    Upload { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = StoreError::from(RecordError::NotFound {
            collection: "items".to_string(),
            id: "abc".to_string(),
        });
        assert_eq!(err.to_string(), "record not found: items/abc");
    }

    #[test]
    fn test_missing_scope_display() {
        let err = ValidationError::MissingScope { field: "kodeToko" };
        assert!(err.to_string().contains("kodeToko"));
    }

    #[test]
    fn test_blob_error_is_distinct_type() {
        // BlobError intentionally does not convert into StoreError.
        let err = BlobError::Upload {
            message: "bucket unreachable".to_string(),
        };
        assert!(err.to_string().contains("bucket unreachable"));
    }
}
