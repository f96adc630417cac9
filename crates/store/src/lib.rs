//! Warung POS Backend Persistence Layer
//!
//! This crate provides the document store abstraction used by the Warung POS
//! backend. Records are schemaless JSON documents grouped into named
//! collections (`users`, `items`, `orders`), and every read is scoped to a
//! tenant through composable equality predicates.
//!
//! # Architecture
//!
//! - [`filter`] - Composable query predicates and sort orders
//! - [`tenant`] - Store/branch codes and the tenant scope applied to reads
//! - [`types`] - The stored document envelope
//! - [`error`] - Error types for all operations
//! - [`core`] - The [`DocumentStore`] trait
//! - [`blob`] - The [`BlobStore`] trait for uploaded media
//! - [`backends`] - Backend implementations (in-memory development backend)
//!
//! # Tenant Scoping
//!
//! Catalog and order reads are always restricted to one store, and
//! optionally to one branch of that store. The scope is constructed once
//! from caller-supplied codes and turned into a conjunctive filter set:
//!
//! ```
//! use warung_store::tenant::TenantScope;
//!
//! let scope = TenantScope::from_parts(Some("TK001".into()), Some("CB001".into())).unwrap();
//! let filters = scope.filters();
//! assert_eq!(filters.len(), 2);
//!
//! // No branch code means "all branches of this store", not "no branch".
//! let scope = TenantScope::from_parts(Some("TK001".into()), None).unwrap();
//! assert_eq!(scope.filters().len(), 1);
//! ```
//!
//! # Quick Start
//!
//! ```
//! use warung_store::backends::memory::MemoryBackend;
//! use warung_store::core::DocumentStore;
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), warung_store::error::StoreError> {
//! let store = MemoryBackend::new();
//! let doc = store
//!     .create("items", json!({"name": "Kopi", "kodeToko": "TK001"}))
//!     .await?;
//! assert!(store.get("items", doc.id()).await?.is_some());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod backends;
pub mod blob;
pub mod core;
pub mod error;
pub mod filter;
pub mod tenant;
pub mod types;

pub use crate::core::DocumentStore;
pub use blob::BlobStore;
pub use error::{BlobError, StoreError, StoreResult};
pub use filter::{Filter, FilterSet, SortOrder};
pub use tenant::{BranchCode, StoreCode, TenantScope};
pub use types::Document;
