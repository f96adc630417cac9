//! Error types for the HTTP API.
//!
//! This module maps the core error taxonomy to HTTP responses. Every error
//! body has the shape `{"error": "<message>"}`.
//!
//! # Error Mapping
//!
//! | Error kind | HTTP status | Body |
//! |-----------|-------------|------|
//! | Validation | 400 | `Bad Request - <detail>` |
//! | Unauthorized | 401 | `Unauthorized - User not found` (always this text) |
//! | NotFound | 404 | resource-specific message |
//! | Infrastructure | 500 | `Internal Server Error` (detail only logged) |
//!
//! An unauthorized login is reported with one fixed body no matter which
//! credential factor failed. Infrastructure details are logged for
//! operators and never surfaced to the caller.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;
use tracing::error;

use warung_auth::AuthError;
use warung_store::error::{BlobError, StoreError};

/// The primary error type for API operations.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed or missing required input (HTTP 400).
    BadRequest {
        /// What was wrong with the request.
        message: String,
    },

    /// Credential or tenant mismatch (HTTP 401).
    Unauthorized,

    /// A referenced record is absent (HTTP 404).
    NotFound {
        /// The response body message.
        message: String,
    },

    /// A collaborator call failed (HTTP 500).
    Internal {
        /// Operator-facing detail; never sent to the caller.
        message: String,
    },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest { message } => write!(f, "bad request: {}", message),
            ApiError::Unauthorized => write!(f, "unauthorized"),
            ApiError::NotFound { message } => write!(f, "not found: {}", message),
            ApiError::Internal { message } => write!(f, "internal error: {}", message),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::BadRequest { message } => (
                StatusCode::BAD_REQUEST,
                format!("Bad Request - {}", message),
            ),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "Unauthorized - User not found".to_string(),
            ),
            ApiError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
            ApiError::Internal { message } => {
                error!(detail = %message, "request failed on infrastructure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        (status, Json(serde_json::json!({ "error": body }))).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Validation(message) => ApiError::BadRequest { message },
            AuthError::Unauthorized => ApiError::Unauthorized,
            AuthError::Hashing(message) => ApiError::Internal { message },
            AuthError::Store(err) => err.into(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Record(_) => ApiError::NotFound {
                message: "Record not found".to_string(),
            },
            StoreError::Validation(e) => ApiError::BadRequest {
                message: e.to_string(),
            },
            StoreError::Backend(e) => ApiError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<BlobError> for ApiError {
    fn from(err: BlobError) -> Self {
        ApiError::Internal {
            message: err.to_string(),
        }
    }
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
