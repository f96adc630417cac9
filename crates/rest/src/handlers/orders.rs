//! Order handlers.
//!
//! Order reads are scoped exactly like item reads, with two differences the
//! platform's clients depend on: results come back newest first by
//! transaction date, and an empty result set is a not-found condition
//! rather than an empty list.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use tracing::debug;

use warung_store::blob::BlobStore;
use warung_store::core::DocumentStore;
use warung_store::filter::SortOrder;

use crate::error::{ApiError, ApiResult};
use crate::handlers::items::ScopeParams;
use crate::state::AppState;

/// The collection holding orders.
pub const ORDERS_COLLECTION: &str = "orders";

/// The record field carrying the transaction date.
pub const FIELD_TRANSACTION_DATE: &str = "tanggal";

/// Handler for `POST /api/orders`.
///
/// The order record is stored as supplied; the caller stamps it with its
/// tenant context (`kodeToko`, optionally `kodeCabang`) and transaction
/// date (`tanggal`) at write time.
///
/// # Response
///
/// - `201 Created` with `{"id": <id>}`
/// - `400 Bad Request` - body is not a JSON object
pub async fn create_order_handler<S, B>(
    State(state): State<AppState<S, B>>,
    Json(payload): Json<Value>,
) -> ApiResult<Response>
where
    S: DocumentStore,
    B: BlobStore,
{
    if !payload.is_object() {
        return Err(ApiError::BadRequest {
            message: "Empty body".to_string(),
        });
    }

    let doc = state.store().create(ORDERS_COLLECTION, payload).await?;

    debug!(id = %doc.id(), "order created");

    Ok((StatusCode::CREATED, Json(json!({ "id": doc.id() }))).into_response())
}

/// Handler for `GET /api/orders`.
///
/// Lists the store's orders newest first by `tanggal`, across all branches
/// unless `kodeCabang` is given.
///
/// # Response
///
/// - `200 OK` with the orders, transaction date descending
/// - `404 Not Found` - `kodeToko` missing, or no orders matched (unlike
///   the items listing, an empty result here is not a success)
pub async fn list_orders_handler<S, B>(
    State(state): State<AppState<S, B>>,
    Query(params): Query<ScopeParams>,
) -> ApiResult<Response>
where
    S: DocumentStore,
    B: BlobStore,
{
    let scope = params.into_scope()?;

    debug!(scope = %scope, "processing orders list");

    let order = SortOrder::descending(FIELD_TRANSACTION_DATE);
    let docs = state
        .store()
        .query(ORDERS_COLLECTION, &scope.filters(), Some(&order))
        .await?;

    if docs.is_empty() {
        return Err(ApiError::NotFound {
            message: "Orders not found".to_string(),
        });
    }

    let orders: Vec<Value> = docs.iter().map(|d| d.content_with_id()).collect();
    Ok((StatusCode::OK, Json(orders)).into_response())
}
