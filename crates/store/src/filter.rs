//! Composable query predicates.
//!
//! The only filter primitive the store requires is equality on a named
//! top-level field. Filters compose into a [`FilterSet`], an immutable list
//! of conjunctive conditions that a backend translates into its native query
//! form (the in-memory backend evaluates them directly). Building the set up
//! front, rather than augmenting a query object conditionally, keeps the
//! scoping logic testable without a backend.

use serde_json::Value;

/// A single equality condition on a named top-level field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    field: String,
    value: String,
}

impl Filter {
    /// Creates an equality filter: `field == value`.
    pub fn eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Returns the field name this filter applies to.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the value the field must equal.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Evaluates this filter against a JSON record.
    ///
    /// Only string-valued fields can match; a missing field never matches.
    pub fn matches(&self, record: &Value) -> bool {
        record
            .get(&self.field)
            .and_then(Value::as_str)
            .is_some_and(|v| v == self.value)
    }
}

/// An immutable conjunctive list of [`Filter`] conditions.
///
/// An empty set matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    filters: Vec<Filter>,
}

impl FilterSet {
    /// Creates an empty filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new set with `filter` appended.
    #[must_use]
    pub fn and(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Returns the conditions in this set.
    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// Returns the number of conditions.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns `true` if this set has no conditions.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Evaluates the conjunction of all conditions against a JSON record.
    pub fn matches(&self, record: &Value) -> bool {
        self.filters.iter().all(|f| f.matches(record))
    }
}

impl From<Filter> for FilterSet {
    fn from(filter: Filter) -> Self {
        FilterSet::new().and(filter)
    }
}

/// Sort direction for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest value first.
    Ascending,
    /// Largest value first.
    Descending,
}

/// An ordering on a named top-level field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    field: String,
    direction: SortDirection,
}

impl SortOrder {
    /// Creates an ascending sort on `field`.
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Creates a descending sort on `field` (most recent first for dates).
    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Descending,
        }
    }

    /// Returns the field the sort applies to.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the sort direction.
    pub fn direction(&self) -> SortDirection {
        self.direction
    }
}
