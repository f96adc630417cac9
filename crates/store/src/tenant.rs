//! Tenant codes and query scoping.
//!
//! Every store ("toko") is identified by a store code and may have
//! subordinate branches ("cabang") identified by branch codes. Catalog and
//! order reads are always scoped to one store via [`TenantScope`]; a branch
//! code narrows the scope further, and its absence means "all branches of
//! this store". There is no mode that lists records across all stores.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::filter::{Filter, FilterSet};

/// The record field that carries the owning store's code.
pub const FIELD_STORE_CODE: &str = "kodeToko";

/// The record field that carries the owning branch's code.
pub const FIELD_BRANCH_CODE: &str = "kodeCabang";

/// An opaque store ("toko") identifier.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreCode(String);

impl StoreCode {
    /// Creates a store code from the given string.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for StoreCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StoreCode({})", self.0)
    }
}

impl From<&str> for StoreCode {
    fn from(s: &str) -> Self {
        StoreCode::new(s)
    }
}

impl From<String> for StoreCode {
    fn from(s: String) -> Self {
        StoreCode::new(s)
    }
}

impl AsRef<str> for StoreCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// An opaque branch ("cabang") identifier.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BranchCode(String);

impl BranchCode {
    /// Creates a branch code from the given string.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BranchCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for BranchCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BranchCode({})", self.0)
    }
}

impl From<&str> for BranchCode {
    fn from(s: &str) -> Self {
        BranchCode::new(s)
    }
}

impl From<String> for BranchCode {
    fn from(s: String) -> Self {
        BranchCode::new(s)
    }
}

impl AsRef<str> for BranchCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The tenant context a scoped read runs under.
///
/// A scope always names a store; the branch is optional. Construction from
/// raw request input goes through [`TenantScope::from_parts`], which rejects
/// a missing store code — scoped reads have no "everything" mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantScope {
    store: StoreCode,
    branch: Option<BranchCode>,
}

impl TenantScope {
    /// Creates a scope covering all branches of `store`.
    pub fn new(store: StoreCode) -> Self {
        Self {
            store,
            branch: None,
        }
    }

    /// Narrows this scope to a single branch.
    #[must_use]
    pub fn with_branch(mut self, branch: BranchCode) -> Self {
        self.branch = Some(branch);
        self
    }

    /// Builds a scope from raw caller-supplied codes.
    ///
    /// The store code is required. An absent or empty branch code means
    /// "all branches of this store".
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingScope`] when the store code is
    /// absent or empty.
    pub fn from_parts(
        store: Option<String>,
        branch: Option<String>,
    ) -> Result<Self, ValidationError> {
        let store = store.filter(|s| !s.is_empty()).ok_or(
            ValidationError::MissingScope {
                field: FIELD_STORE_CODE,
            },
        )?;
        let branch = branch.filter(|b| !b.is_empty()).map(BranchCode::new);

        Ok(Self {
            store: StoreCode::new(store),
            branch,
        })
    }

    /// Returns the store this scope is restricted to.
    pub fn store(&self) -> &StoreCode {
        &self.store
    }

    /// Returns the branch this scope is restricted to, if any.
    pub fn branch(&self) -> Option<&BranchCode> {
        self.branch.as_ref()
    }

    /// Builds the conjunctive filter set for this scope.
    ///
    /// Always filters on the store code; the branch filter is appended only
    /// when a branch is present.
    pub fn filters(&self) -> FilterSet {
        let filters = FilterSet::from(Filter::eq(FIELD_STORE_CODE, self.store.as_str()));
        match &self.branch {
            Some(branch) => filters.and(Filter::eq(FIELD_BRANCH_CODE, branch.as_str())),
            None => filters,
        }
    }
}

impl fmt::Display for TenantScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.branch {
            Some(branch) => write!(f, "{}/{}", self.store, branch),
            None => write!(f, "{}", self.store),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_store_only_scope_matches_any_branch() {
        let scope = TenantScope::new(StoreCode::new("TK001"));
        let filters = scope.filters();

        assert_eq!(filters.len(), 1);
        assert!(filters.matches(&json!({"kodeToko": "TK001"})));
        assert!(filters.matches(&json!({"kodeToko": "TK001", "kodeCabang": "CB001"})));
        assert!(filters.matches(&json!({"kodeToko": "TK001", "kodeCabang": "CB002"})));
        assert!(!filters.matches(&json!({"kodeToko": "TK002"})));
    }

    #[test]
    fn test_branch_scope_matches_single_branch() {
        let scope = TenantScope::new(StoreCode::new("TK001")).with_branch(BranchCode::new("CB001"));
        let filters = scope.filters();

        assert_eq!(filters.len(), 2);
        assert!(filters.matches(&json!({"kodeToko": "TK001", "kodeCabang": "CB001"})));
        assert!(!filters.matches(&json!({"kodeToko": "TK001", "kodeCabang": "CB002"})));
        assert!(!filters.matches(&json!({"kodeToko": "TK002", "kodeCabang": "CB001"})));
    }

    #[test]
    fn test_from_parts_requires_store_code() {
        assert!(TenantScope::from_parts(None, None).is_err());
        assert!(TenantScope::from_parts(None, Some("CB001".into())).is_err());
        assert!(TenantScope::from_parts(Some(String::new()), None).is_err());
    }

    #[test]
    fn test_from_parts_empty_branch_means_all_branches() {
        let scope = TenantScope::from_parts(Some("TK001".into()), Some(String::new())).unwrap();
        assert!(scope.branch().is_none());
        assert_eq!(scope.filters().len(), 1);
    }

    #[test]
    fn test_from_parts_with_branch() {
        let scope =
            TenantScope::from_parts(Some("TK001".into()), Some("CB001".into())).unwrap();
        assert_eq!(scope.store().as_str(), "TK001");
        assert_eq!(scope.branch().unwrap().as_str(), "CB001");
    }

    #[test]
    fn test_display() {
        let scope = TenantScope::new(StoreCode::new("TK001")).with_branch(BranchCode::new("CB001"));
        assert_eq!(scope.to_string(), "TK001/CB001");
    }

    #[test]
    fn test_code_serde_transparent() {
        let code = StoreCode::new("TK001");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"TK001\"");

        let parsed: BranchCode = serde_json::from_str("\"CB001\"").unwrap();
        assert_eq!(parsed.as_str(), "CB001");
    }
}
