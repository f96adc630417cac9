//! Warung POS Backend Server
//!
//! Backend for a multi-store point-of-sale platform: store and branch
//! accounts, tenant-scoped catalog items, and orders.

use clap::Parser;
use tracing::info;

use warung_rest::{ServerConfig, create_app, init_logging};
use warung_store::backends::memory::{MemoryBackend, MemoryBlobStore};

/// Starts the axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        "Starting Warung POS backend"
    );

    // Development backends. A production deployment implements the
    // DocumentStore and BlobStore traits over hosted services and wires
    // them in here instead.
    let store = MemoryBackend::new();
    let blobs = MemoryBlobStore::new(&config.media_base_url);

    let app = create_app(store, blobs, config.clone());
    serve(app, &config).await
}
