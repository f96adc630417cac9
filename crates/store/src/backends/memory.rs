//! In-memory backend for development and tests.

use std::cmp::Ordering;
use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::RwLock;
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::blob::BlobStore;
use crate::core::DocumentStore;
use crate::error::{BlobError, RecordError, StoreResult, ValidationError};
use crate::filter::{FilterSet, SortDirection, SortOrder};
use crate::types::Document;

/// An in-memory [`DocumentStore`].
///
/// Collections are created lazily on first write. Filtering and sorting run
/// in-process with the same semantics a hosted document database provides:
/// conjunctive equality predicates and a sort on a named top-level field.
/// Data does not survive the process.
#[derive(Default)]
pub struct MemoryBackend {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryBackend {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of records in `collection`.
    pub fn len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .get(collection)
            .map_or(0, Vec::len)
    }

    /// Returns `true` if `collection` holds no records.
    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }
}

#[async_trait]
impl DocumentStore for MemoryBackend {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn create(&self, collection: &str, record: Value) -> StoreResult<Document> {
        if !record.is_object() {
            return Err(ValidationError::NotAnObject {
                collection: collection.to_string(),
            }
            .into());
        }

        let doc = Document::new(Uuid::new_v4().to_string(), record);
        debug!(collection = %collection, id = %doc.id(), "record created");

        self.collections
            .write()
            .entry(collection.to_string())
            .or_default()
            .push(doc.clone());

        Ok(doc)
    }

    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<Document>> {
        Ok(self
            .collections
            .read()
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| d.id() == id))
            .cloned())
    }

    async fn query(
        &self,
        collection: &str,
        filters: &FilterSet,
        order: Option<&SortOrder>,
    ) -> StoreResult<Vec<Document>> {
        let mut results: Vec<Document> = self
            .collections
            .read()
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|d| filters.matches(d.content()))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        if let Some(order) = order {
            results.sort_by(|a, b| {
                let ordering = compare_field(
                    a.content().get(order.field()),
                    b.content().get(order.field()),
                );
                match order.direction() {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }

        debug!(
            collection = %collection,
            conditions = filters.len(),
            matched = results.len(),
            "query evaluated"
        );

        Ok(results)
    }

    async fn update(&self, collection: &str, id: &str, partial: Value) -> StoreResult<Document> {
        let Some(partial) = partial.as_object().cloned() else {
            return Err(ValidationError::NotAnObject {
                collection: collection.to_string(),
            }
            .into());
        };

        let mut collections = self.collections.write();
        let doc = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|d| d.id() == id))
            .ok_or_else(|| RecordError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;

        // Merge: supplied fields replace stored values, the rest stay put.
        let mut content = doc.content().clone();
        if let Some(map) = content.as_object_mut() {
            for (key, value) in partial {
                map.insert(key, value);
            }
        }
        doc.update_content(content);

        Ok(doc.clone())
    }

    async fn delete(&self, collection: &str, id: &str) -> StoreResult<()> {
        let mut collections = self.collections.write();
        let docs = collections
            .get_mut(collection)
            .ok_or_else(|| RecordError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;

        let before = docs.len();
        docs.retain(|d| d.id() != id);
        if docs.len() == before {
            return Err(RecordError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            }
            .into());
        }

        debug!(collection = %collection, id = %id, "record deleted");
        Ok(())
    }
}

/// Compares two optional field values for sorting.
///
/// Strings compare lexicographically (ISO-8601 dates sort chronologically),
/// numbers numerically. Records missing the field compare as smallest, so a
/// descending sort puts them last.
fn compare_field(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => compare_values(a, b),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => a
            .as_f64()
            .partial_cmp(&b.as_f64())
            .unwrap_or(Ordering::Equal),
        _ => a.to_string().cmp(&b.to_string()),
    }
}

/// An in-memory [`BlobStore`].
///
/// Uploads are held in process memory and assigned URLs under a configured
/// base, mimicking a public bucket. Nothing actually serves the URLs.
pub struct MemoryBlobStore {
    base_url: String,
    objects: RwLock<HashMap<String, StoredBlob>>,
}

struct StoredBlob {
    content_type: String,
    data: Bytes,
}

impl MemoryBlobStore {
    /// Creates a blob store issuing URLs under `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            objects: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the number of stored blobs.
    pub fn len(&self) -> usize {
        self.objects.read().len()
    }

    /// Returns `true` if no blobs are stored.
    pub fn is_empty(&self) -> bool {
        self.objects.read().is_empty()
    }

    /// Returns the content type of the blob stored under `name`, if any.
    pub fn content_type_of(&self, name: &str) -> Option<String> {
        self.objects
            .read()
            .get(name)
            .map(|b| b.content_type.clone())
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn put(&self, data: Bytes, content_type: &str) -> Result<String, BlobError> {
        let name = Uuid::new_v4().to_string();
        debug!(name = %name, content_type = %content_type, size = data.len(), "blob stored");

        self.objects.write().insert(
            name.clone(),
            StoredBlob {
                content_type: content_type.to_string(),
                data,
            },
        );

        Ok(format!("{}/{}", self.base_url.trim_end_matches('/'), name))
    }
}
