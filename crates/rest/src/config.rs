//! Server configuration.
//!
//! Supports both programmatic configuration and environment variable
//! overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `WARUNG_SERVER_PORT` | 3000 | Server port |
//! | `WARUNG_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `WARUNG_LOG_LEVEL` | info | Log level |
//! | `WARUNG_MAX_BODY_SIZE` | 10485760 | Max request body (bytes) |
//! | `WARUNG_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `WARUNG_ENABLE_CORS` | true | Enable CORS |
//! | `WARUNG_CORS_ORIGINS` | * | Allowed origins |
//! | `WARUNG_CORS_METHODS` | * | Allowed methods |
//! | `WARUNG_CORS_HEADERS` | * | Allowed headers |
//! | `WARUNG_MEDIA_BASE_URL` | http://localhost:3000/media | Base URL for uploaded media |

use clap::Parser;

/// Server configuration for the Warung POS API.
///
/// Constructed from environment variables via [`ServerConfig::from_env`],
/// from command line arguments via `ServerConfig::parse`, or
/// programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "warung-server")]
#[command(about = "Warung POS Backend Server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "WARUNG_SERVER_PORT", default_value = "3000")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "WARUNG_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "WARUNG_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Maximum request body size in bytes (bounds item image uploads).
    #[arg(long, env = "WARUNG_MAX_BODY_SIZE", default_value = "10485760")]
    pub max_body_size: usize,

    /// Request timeout in seconds.
    #[arg(long, env = "WARUNG_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "WARUNG_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "WARUNG_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(long, env = "WARUNG_CORS_METHODS", default_value = "*")]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(long, env = "WARUNG_CORS_HEADERS", default_value = "*")]
    pub cors_headers: String,

    /// Base URL uploaded item images are served from.
    #[arg(
        long,
        env = "WARUNG_MEDIA_BASE_URL",
        default_value = "http://localhost:3000/media"
    )]
    pub media_base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            max_body_size: 10 * 1024 * 1024, // 10MB
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            media_base_url: "http://localhost:3000/media".to_string(),
        }
    }
}

impl ServerConfig {
    /// Creates a config from environment variables, falling back to
    /// defaults when parsing fails.
    pub fn from_env() -> Self {
        Self::try_parse().unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.max_body_size == 0 {
            errors.push("Max body size cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.media_base_url.is_empty() {
            errors.push("Media base URL cannot be empty".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Creates a configuration suitable for testing.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            max_body_size: 10 * 1024 * 1024,
            request_timeout: 5, // Shorter timeout for tests
            enable_cors: false,
            cors_origins: "*".to_string(),
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            media_base_url: "http://localhost:0/media".to_string(),
        }
    }
}
