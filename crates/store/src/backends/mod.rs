//! Backend implementations.
//!
//! Production deployments point [`DocumentStore`](crate::core::DocumentStore)
//! and [`BlobStore`](crate::blob::BlobStore) at hosted services; the
//! in-memory backend here backs development servers and tests.

pub mod memory;
