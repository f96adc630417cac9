//! Stored document types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A JSON record with persistence metadata.
///
/// The store assigns the `id` at creation; it is immutable thereafter. The
/// content itself is schemaless JSON — the store does not interpret it
/// beyond evaluating equality filters on top-level fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// The store-assigned identifier.
    id: String,

    /// The record content as JSON.
    content: Value,

    /// When the record was first created.
    created_at: DateTime<Utc>,

    /// When the record was last modified.
    updated_at: DateTime<Utc>,
}

impl Document {
    /// Creates a new document with both timestamps set to now.
    pub fn new(id: impl Into<String>, content: Value) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the store-assigned identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the record content.
    pub fn content(&self) -> &Value {
        &self.content
    }

    /// Consumes the document and returns its content.
    pub fn into_content(self) -> Value {
        self.content
    }

    /// Returns when the record was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when the record was last modified.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the content and bumps the modification timestamp.
    pub fn update_content(&mut self, content: Value) {
        self.content = content;
        self.updated_at = Utc::now();
    }

    /// Returns the content with the `id` field spliced in.
    ///
    /// This is the shape list and read endpoints respond with.
    pub fn content_with_id(&self) -> Value {
        let mut merged = self.content.clone();
        if let Some(map) = merged.as_object_mut() {
            map.insert("id".to_string(), Value::String(self.id.clone()));
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_document() {
        let doc = Document::new("abc", json!({"name": "Kopi"}));
        assert_eq!(doc.id(), "abc");
        assert_eq!(doc.content()["name"], "Kopi");
        assert_eq!(doc.created_at(), doc.updated_at());
    }

    #[test]
    fn test_update_content_bumps_timestamp() {
        let mut doc = Document::new("abc", json!({"name": "Kopi"}));
        let created = doc.created_at();
        doc.update_content(json!({"name": "Teh"}));
        assert_eq!(doc.content()["name"], "Teh");
        assert!(doc.updated_at() >= created);
    }

    #[test]
    fn test_content_with_id() {
        let doc = Document::new("abc", json!({"name": "Kopi"}));
        let merged = doc.content_with_id();
        assert_eq!(merged["id"], "abc");
        assert_eq!(merged["name"], "Kopi");
    }
}
