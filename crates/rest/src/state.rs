//! Application state for the HTTP API.
//!
//! Holds the explicitly injected collaborators every handler needs: the
//! document store, the blob store, the auth service built over the former,
//! and the server configuration. Nothing here is a process-wide global —
//! the process entry point constructs the state and passes it down.

use std::sync::Arc;

use warung_auth::AuthService;
use warung_store::blob::BlobStore;
use warung_store::core::DocumentStore;

use crate::config::ServerConfig;

/// Shared application state.
///
/// # Type Parameters
///
/// * `S` - The document store backend (must implement [`DocumentStore`])
/// * `B` - The blob store backend (must implement [`BlobStore`])
pub struct AppState<S, B> {
    /// The document store backend.
    store: Arc<S>,

    /// The blob store backend.
    blobs: Arc<B>,

    /// The auth service, built over the same document store.
    auth: AuthService<S>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone: the backends are behind Arc and need not be Clone
impl<S, B> Clone for AppState<S, B> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            blobs: Arc::clone(&self.blobs),
            auth: self.auth.clone(),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: DocumentStore, B: BlobStore> AppState<S, B> {
    /// Creates a new state over the given backends and configuration.
    pub fn new(store: Arc<S>, blobs: Arc<B>, config: ServerConfig) -> Self {
        let auth = AuthService::new(Arc::clone(&store));
        Self {
            store,
            blobs,
            auth,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the document store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns a reference to the blob store.
    pub fn blobs(&self) -> &B {
        &self.blobs
    }

    /// Returns a reference to the auth service.
    pub fn auth(&self) -> &AuthService<S> {
        &self.auth
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
