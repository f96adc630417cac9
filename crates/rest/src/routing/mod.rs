//! Route configuration.
//!
//! All API routes live under `/api`, matching the paths the platform's
//! clients already call.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | POST | `/api/register` | register |
//! | POST | `/api/login` | login |
//! | PUT | `/api/users/{id}` | update account |
//! | DELETE | `/api/users/{id}` | delete account |
//! | GET | `/api/items` | list items (scoped) |
//! | POST | `/api/items` | create item (multipart) |
//! | GET | `/api/items/{id}` | read item |
//! | PUT | `/api/items/{id}` | update item |
//! | DELETE | `/api/items/{id}` | delete item |
//! | GET | `/api/orders` | list orders (scoped, newest first) |
//! | POST | `/api/orders` | create order |
//! | GET | `/health` | health check |

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use warung_store::blob::BlobStore;
use warung_store::core::DocumentStore;

use crate::handlers;
use crate::state::AppState;

/// Creates the API router over the given state.
pub fn create_routes<S, B>(state: AppState<S, B>) -> Router
where
    S: DocumentStore + 'static,
    B: BlobStore + 'static,
{
    Router::new()
        // System
        .route("/health", get(handlers::health_handler))
        // Accounts
        .route("/api/register", post(handlers::register_handler::<S, B>))
        .route("/api/login", post(handlers::login_handler::<S, B>))
        .route(
            "/api/users/{id}",
            put(handlers::update_account_handler::<S, B>),
        )
        .route(
            "/api/users/{id}",
            delete(handlers::delete_account_handler::<S, B>),
        )
        // Catalog items
        .route("/api/items", get(handlers::list_items_handler::<S, B>))
        .route("/api/items", post(handlers::create_item_handler::<S, B>))
        .route("/api/items/{id}", get(handlers::get_item_handler::<S, B>))
        .route("/api/items/{id}", put(handlers::update_item_handler::<S, B>))
        .route(
            "/api/items/{id}",
            delete(handlers::delete_item_handler::<S, B>),
        )
        // Orders
        .route("/api/orders", get(handlers::list_orders_handler::<S, B>))
        .route("/api/orders", post(handlers::create_order_handler::<S, B>))
        // State
        .with_state(state)
}
