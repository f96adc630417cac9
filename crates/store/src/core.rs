//! Core document store trait.
//!
//! [`DocumentStore`] is the abstraction the rest of the system is written
//! against. The backing service only needs to support equality predicates on
//! named fields, composed conjunctively, plus a sort on a named field — the
//! profile of a hosted document database.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::StoreResult;
use crate::filter::{FilterSet, SortOrder};
use crate::types::Document;

/// Asynchronous CRUD over named collections of JSON documents.
///
/// All calls are independent; the store holds no per-request state and the
/// caller issues at most one outstanding call per logical step. Failures
/// from the backing service surface as
/// [`BackendError`](crate::error::BackendError) — they are never swallowed.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Returns a human-readable name for this backend.
    fn backend_name(&self) -> &'static str;

    /// Creates a new record and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// * `StoreError::Validation` - if `record` is not a JSON object
    /// * `StoreError::Backend` - if the backing service call fails
    async fn create(&self, collection: &str, record: Value) -> StoreResult<Document>;

    /// Reads a record by identifier.
    ///
    /// Returns `None` when no record with that identifier exists.
    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<Document>>;

    /// Returns all records matching `filters`, optionally ordered.
    ///
    /// An empty filter set matches the whole collection. Ordering is applied
    /// by the backend; callers must not rely on any order when `order` is
    /// `None`.
    async fn query(
        &self,
        collection: &str,
        filters: &FilterSet,
        order: Option<&SortOrder>,
    ) -> StoreResult<Vec<Document>>;

    /// Merges `partial` into an existing record.
    ///
    /// Fields present in `partial` replace the stored values; all other
    /// fields are left untouched.
    ///
    /// # Errors
    ///
    /// * `StoreError::Record(NotFound)` - if the record doesn't exist
    /// * `StoreError::Validation` - if `partial` is not a JSON object
    async fn update(&self, collection: &str, id: &str, partial: Value) -> StoreResult<Document>;

    /// Deletes a record by identifier.
    ///
    /// # Errors
    ///
    /// * `StoreError::Record(NotFound)` - if the record doesn't exist
    async fn delete(&self, collection: &str, id: &str) -> StoreResult<()>;

    /// Returns the first record matching `filters`, if any.
    ///
    /// Convenience for lookups expected to match at most one record.
    async fn find_first(
        &self,
        collection: &str,
        filters: &FilterSet,
    ) -> StoreResult<Option<Document>> {
        Ok(self
            .query(collection, filters, None)
            .await?
            .into_iter()
            .next())
    }
}
