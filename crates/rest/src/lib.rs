//! # warung-rest - Warung POS Backend HTTP API
//!
//! HTTP boundary for the Warung POS backend: registration and login for
//! store ("toko") and branch ("cabang") accounts, plus tenant-scoped
//! catalog and order access.
//!
//! ## API Endpoints
//!
//! | Operation | HTTP | URL | Success |
//! |-----------|------|-----|---------|
//! | Register | POST | `/api/register` | 201 + `{"uid"}` |
//! | Login | POST | `/api/login` | 200 + `{"id", "data"}` |
//! | Update account | PUT | `/api/users/{id}` | 200 + `{"id"}` |
//! | Delete account | DELETE | `/api/users/{id}` | 200 |
//! | List items | GET | `/api/items?kodeToko=&kodeCabang=` | 200 + list |
//! | Create item | POST | `/api/items` (multipart) | 201 + `{"id"}` |
//! | Read item | GET | `/api/items/{id}` | 200 |
//! | Update item | PUT | `/api/items/{id}` | 200 |
//! | Delete item | DELETE | `/api/items/{id}` | 200 |
//! | List orders | GET | `/api/orders?kodeToko=&kodeCabang=` | 200 + list (tanggal desc) |
//! | Create order | POST | `/api/orders` | 201 + `{"id"}` |
//!
//! ## Error Handling
//!
//! Errors are returned as `{"error": "<message>"}` with the status codes
//! described in [`error`]. Two behaviors clients depend on:
//!
//! - An unauthorized login returns one fixed 401 body regardless of which
//!   credential factor failed.
//! - An empty orders listing is a 404, while an empty items listing is a
//!   normal 200 with an empty array.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use warung_rest::{ServerConfig, create_app};
//! use warung_store::backends::memory::{MemoryBackend, MemoryBlobStore};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::default();
//!     let store = MemoryBackend::new();
//!     let blobs = MemoryBlobStore::new(&config.media_base_url);
//!
//!     let app = create_app(store, blobs, config);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`error`] - API error type and status code mapping
//! - [`config`] - Server configuration
//! - [`state`] - Application state (stores, auth service, configuration)
//! - [`handlers`] - Request handlers per resource
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use state::AppState;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

use warung_store::blob::BlobStore;
use warung_store::core::DocumentStore;

/// Creates the axum application with the given backends and configuration.
pub fn create_app<S, B>(store: S, blobs: B, config: ServerConfig) -> Router
where
    S: DocumentStore + 'static,
    B: BlobStore + 'static,
{
    info!(
        backend = store.backend_name(),
        "Creating API server"
    );

    // Create application state
    let state = AppState::new(Arc::new(store), Arc::new(blobs), config.clone());

    // Build the router with all routes
    let router = routing::create_routes(state).layer(DefaultBodyLimit::max(config.max_body_size));

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout,
        )));

    // Add CORS if enabled
    let router = if config.enable_cors {
        let cors = build_cors_layer(&config);
        router.layer(cors)
    } else {
        router
    };

    // Apply remaining middleware
    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    // Configure origins
    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    // Configure methods
    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    // Configure headers
    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warung_rest={level},warung_auth={level},warung_store={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
