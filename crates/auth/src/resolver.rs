//! Tenant classification for login codes.
//!
//! A login code identifies either a store or one of its branches. Branch
//! codes carry the fixed, case-sensitive prefix `CB`; every other code —
//! including codes shorter than the prefix — is treated as a store code.
//! The fallback is silent, not an error.

use warung_store::filter::Filter;
use warung_store::tenant::{FIELD_BRANCH_CODE, FIELD_STORE_CODE};

/// The fixed prefix that marks a code as a branch code.
pub const BRANCH_PREFIX: &str = "CB";

/// What a login code identifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TenantKind {
    /// A top-level store ("toko").
    Store,
    /// A branch ("cabang") subordinate to a store.
    Branch,
}

/// Classifies a raw login code.
pub fn classify(code: &str) -> TenantKind {
    if code.starts_with(BRANCH_PREFIX) {
        TenantKind::Branch
    } else {
        TenantKind::Store
    }
}

/// Builds the account-lookup filter for a login code.
///
/// Store codes match on the account's `kodeToko`, branch codes on its
/// `kodeCabang`.
pub fn account_filter(code: &str) -> Filter {
    match classify(code) {
        TenantKind::Store => Filter::eq(FIELD_STORE_CODE, code),
        TenantKind::Branch => Filter::eq(FIELD_BRANCH_CODE, code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cb_prefix_is_branch() {
        assert_eq!(classify("CB001"), TenantKind::Branch);
        assert_eq!(classify("CB"), TenantKind::Branch);
    }

    #[test]
    fn test_other_codes_are_store() {
        assert_eq!(classify("TK001"), TenantKind::Store);
        assert_eq!(classify("XYZ"), TenantKind::Store);
    }

    #[test]
    fn test_short_codes_fall_back_to_store() {
        assert_eq!(classify("C"), TenantKind::Store);
        assert_eq!(classify(""), TenantKind::Store);
    }

    #[test]
    fn test_prefix_is_case_sensitive() {
        assert_eq!(classify("cb001"), TenantKind::Store);
        assert_eq!(classify("Cb001"), TenantKind::Store);
    }

    #[test]
    fn test_account_filter_fields() {
        let filter = account_filter("TK001");
        assert_eq!(filter.field(), FIELD_STORE_CODE);
        assert_eq!(filter.value(), "TK001");

        let filter = account_filter("CB001");
        assert_eq!(filter.field(), FIELD_BRANCH_CODE);
        assert_eq!(filter.value(), "CB001");
    }
}
