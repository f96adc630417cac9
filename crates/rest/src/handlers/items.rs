//! Catalog item handlers.
//!
//! Item reads are scoped to the caller's store and, optionally, one branch.
//! Item creation is a multipart request: the image part is uploaded to the
//! blob store and the item records the returned URL.

use axum::{
    Json,
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use serde::Deserialize;
use serde_json::{Map, Value, json};
use tracing::debug;

use warung_store::blob::BlobStore;
use warung_store::core::DocumentStore;
use warung_store::tenant::TenantScope;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// The collection holding catalog items.
pub const ITEMS_COLLECTION: &str = "items";

/// Tenant scope query parameters for list endpoints.
#[derive(Debug, Deserialize, Default)]
pub struct ScopeParams {
    /// The store code the read is scoped to. Required.
    #[serde(rename = "kodeToko")]
    pub kode_toko: Option<String>,

    /// Optional branch code narrowing the read to one branch.
    #[serde(rename = "kodeCabang")]
    pub kode_cabang: Option<String>,
}

impl ScopeParams {
    /// Resolves the parameters into a [`TenantScope`].
    ///
    /// A missing store code is reported as a not-found condition on the
    /// list endpoints, matching the platform's original contract.
    pub fn into_scope(self) -> ApiResult<TenantScope> {
        TenantScope::from_parts(self.kode_toko, self.kode_cabang).map_err(|_| {
            ApiError::NotFound {
                message: "Store not found".to_string(),
            }
        })
    }
}

/// Handler for `GET /api/items`.
///
/// Lists the store's catalog, across all branches unless `kodeCabang` is
/// given. An empty result is a normal empty list.
///
/// # Response
///
/// - `200 OK` with a (possibly empty) array of items
/// - `404 Not Found` - `kodeToko` missing
pub async fn list_items_handler<S, B>(
    State(state): State<AppState<S, B>>,
    Query(params): Query<ScopeParams>,
) -> ApiResult<Response>
where
    S: DocumentStore,
    B: BlobStore,
{
    let scope = params.into_scope()?;

    debug!(scope = %scope, "processing items list");

    let docs = state
        .store()
        .query(ITEMS_COLLECTION, &scope.filters(), None)
        .await?;

    let items: Vec<Value> = docs.iter().map(|d| d.content_with_id()).collect();
    Ok((StatusCode::OK, Json(items)).into_response())
}

/// Handler for `POST /api/items`.
///
/// Multipart request carrying `name`, `price`, `kodeToko`, optionally
/// `kodeCabang`, and the image under `file`. The image is uploaded to the
/// blob store first; the item is only written once the upload produced a
/// URL.
///
/// # Response
///
/// - `201 Created` with `{"id": <id>}`
/// - `400 Bad Request` - missing file or missing required fields
/// - `500 Internal Server Error` - image upload or persist failed
pub async fn create_item_handler<S, B>(
    State(state): State<AppState<S, B>>,
    mut multipart: Multipart,
) -> ApiResult<Response>
where
    S: DocumentStore,
    B: BlobStore,
{
    let mut name = None;
    let mut price = None;
    let mut kode_toko = None;
    let mut kode_cabang = None;
    let mut file: Option<(Bytes, String)> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        ApiError::BadRequest {
            message: format!("malformed multipart body: {}", e),
        }
    })? {
        let field_name = field.name().map(ToString::to_string);
        match field_name.as_deref() {
            Some("name") => name = Some(read_text(field).await?),
            Some("price") => price = Some(read_text(field).await?),
            Some("kodeToko") => kode_toko = Some(read_text(field).await?),
            Some("kodeCabang") => kode_cabang = Some(read_text(field).await?),
            Some("file") => {
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field.bytes().await.map_err(|e| ApiError::BadRequest {
                    message: format!("failed to read file part: {}", e),
                })?;
                file = Some((data, content_type));
            }
            _ => {}
        }
    }

    let Some((data, content_type)) = file else {
        return Err(ApiError::BadRequest {
            message: "No file uploaded".to_string(),
        });
    };

    let (name, price, kode_toko) = match (name, price, kode_toko) {
        (Some(n), Some(p), Some(k)) if !k.is_empty() => (n, p, k),
        _ => {
            return Err(ApiError::BadRequest {
                message: "name, price, and kodeToko are required".to_string(),
            });
        }
    };

    let image_url = state.blobs().put(data, &content_type).await?;

    let mut record = Map::new();
    record.insert("name".to_string(), Value::String(name));
    record.insert("price".to_string(), Value::String(price));
    record.insert("kodeToko".to_string(), Value::String(kode_toko));
    if let Some(cabang) = kode_cabang.filter(|c| !c.is_empty()) {
        record.insert("kodeCabang".to_string(), Value::String(cabang));
    }
    record.insert("imageUrl".to_string(), Value::String(image_url));

    let doc = state
        .store()
        .create(ITEMS_COLLECTION, Value::Object(record))
        .await?;

    debug!(id = %doc.id(), "item created");

    Ok((StatusCode::CREATED, Json(json!({ "id": doc.id() }))).into_response())
}

/// Handler for `GET /api/items/{id}`.
///
/// # Response
///
/// - `200 OK` with the item (`id` spliced into the record)
/// - `404 Not Found` - unknown identifier
pub async fn get_item_handler<S, B>(
    State(state): State<AppState<S, B>>,
    Path(id): Path<String>,
) -> ApiResult<Response>
where
    S: DocumentStore,
    B: BlobStore,
{
    let doc = state.store().get(ITEMS_COLLECTION, &id).await?;

    match doc {
        Some(doc) => Ok((StatusCode::OK, Json(doc.content_with_id())).into_response()),
        None => Err(ApiError::NotFound {
            message: "Item not found".to_string(),
        }),
    }
}

/// Handler for `PUT /api/items/{id}`.
///
/// Merges the supplied fields into the item; everything else stays put.
///
/// # Response
///
/// - `200 OK` with the merged item
/// - `404 Not Found` - unknown identifier
pub async fn update_item_handler<S, B>(
    State(state): State<AppState<S, B>>,
    Path(id): Path<String>,
    Json(partial): Json<Value>,
) -> ApiResult<Response>
where
    S: DocumentStore,
    B: BlobStore,
{
    debug!(id = %id, "processing item update");

    let doc = state.store().update(ITEMS_COLLECTION, &id, partial).await?;
    Ok((StatusCode::OK, Json(doc.content_with_id())).into_response())
}

/// Handler for `DELETE /api/items/{id}`.
///
/// # Response
///
/// - `200 OK` with `{"success": true}`
/// - `404 Not Found` - unknown identifier
pub async fn delete_item_handler<S, B>(
    State(state): State<AppState<S, B>>,
    Path(id): Path<String>,
) -> ApiResult<Response>
where
    S: DocumentStore,
    B: BlobStore,
{
    state.store().delete(ITEMS_COLLECTION, &id).await?;

    debug!(id = %id, "item deleted");

    Ok((StatusCode::OK, Json(json!({ "success": true }))).into_response())
}

/// Reads a text part, mapping decode failures to a bad request.
async fn read_text(field: axum::extract::multipart::Field<'_>) -> ApiResult<String> {
    field.text().await.map_err(|e| ApiError::BadRequest {
        message: format!("malformed multipart field: {}", e),
    })
}
