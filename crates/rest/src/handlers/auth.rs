//! Registration, login, and account management handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use warung_auth::{AccountUpdate, Registration};
use warung_store::blob::BlobStore;
use warung_store::core::DocumentStore;

use crate::error::ApiResult;
use crate::state::AppState;

/// Handler for `POST /api/register`.
///
/// The payload must carry either a complete store identity
/// (`kodeToko` + `namaToko`) or a complete branch identity
/// (`kodeCabang` + `namaCabang`), plus `username` and `password`. The role
/// is derived from which identity is present; store identity wins when both
/// are supplied.
///
/// # Response
///
/// - `201 Created` with `{"uid": <id>}`
/// - `400 Bad Request` - missing identity, username, or password
pub async fn register_handler<S, B>(
    State(state): State<AppState<S, B>>,
    Json(payload): Json<Value>,
) -> ApiResult<Response>
where
    S: DocumentStore,
    B: BlobStore,
{
    let registration = Registration::from_value(payload)?;

    debug!(role = ?registration.role(), "processing register request");

    let uid = state.auth().register(registration).await?;
    Ok((StatusCode::CREATED, Json(json!({ "uid": uid }))).into_response())
}

/// Login request payload.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Store or branch code.
    #[serde(default)]
    pub kode: Option<String>,

    /// Caller-chosen handle.
    #[serde(default)]
    pub username: Option<String>,

    /// Plaintext credential.
    #[serde(default)]
    pub password: Option<String>,
}

/// Handler for `POST /api/login`.
///
/// The code is classified by prefix: codes starting with `CB` log into a
/// branch account, everything else into a store account.
///
/// # Response
///
/// - `200 OK` with `{"id": <id>, "data": <account>}`; branch logins get
///   `namaToko` blanked in the returned record
/// - `400 Bad Request` - missing kode, username, or password
/// - `401 Unauthorized` - unknown code, wrong username, or wrong password
///   (one indistinguishable outcome)
pub async fn login_handler<S, B>(
    State(state): State<AppState<S, B>>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Response>
where
    S: DocumentStore,
    B: BlobStore,
{
    let kode = request.kode.unwrap_or_default();
    let username = request.username.unwrap_or_default();
    let password = request.password.unwrap_or_default();

    debug!(kode = %kode, "processing login request");

    let session = state.auth().login(&kode, &username, &password).await?;

    Ok((
        StatusCode::OK,
        Json(json!({ "id": session.id, "data": session.account })),
    )
        .into_response())
}

/// Handler for `PUT /api/users/{id}`.
///
/// Applies a partial update; a supplied `password` is re-hashed before
/// anything is persisted, all other fields merge as given.
///
/// # Response
///
/// - `200 OK` with `{"id": <id>}`
/// - `400 Bad Request` - no fields supplied
/// - `404 Not Found` - unknown identifier
pub async fn update_account_handler<S, B>(
    State(state): State<AppState<S, B>>,
    Path(id): Path<String>,
    Json(update): Json<AccountUpdate>,
) -> ApiResult<Response>
where
    S: DocumentStore,
    B: BlobStore,
{
    debug!(id = %id, "processing account update");

    let id = state.auth().update_account(&id, update).await?;
    Ok((StatusCode::OK, Json(json!({ "id": id }))).into_response())
}

/// Handler for `DELETE /api/users/{id}`.
///
/// # Response
///
/// - `200 OK` with `{"success": true}`
/// - `404 Not Found` - unknown identifier
pub async fn delete_account_handler<S, B>(
    State(state): State<AppState<S, B>>,
    Path(id): Path<String>,
) -> ApiResult<Response>
where
    S: DocumentStore,
    B: BlobStore,
{
    debug!(id = %id, "processing account delete");

    state.auth().delete_account(&id).await?;
    Ok((StatusCode::OK, Json(json!({ "success": true }))).into_response())
}
