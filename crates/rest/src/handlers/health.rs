//! Health check handler.

use axum::Json;
use serde_json::{Value, json};

/// Handler for `GET /health`.
///
/// Returns `200 OK` while the process is serving requests.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
