//! Blob storage trait for uploaded media.

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::BlobError;

/// Write-only access to a blob storage service.
///
/// The service accepts a byte payload plus its content type and returns a
/// publicly resolvable URL. Upload failures are reported as [`BlobError`],
/// a kind distinct from document-store failures so the boundary layer can
/// tell a broken image upload apart from a broken database.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Uploads `data` and returns the public URL it is served from.
    async fn put(&self, data: Bytes, content_type: &str) -> Result<String, BlobError>;
}
