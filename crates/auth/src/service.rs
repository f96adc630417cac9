//! The authentication service.
//!
//! Orchestrates registration, login, and account updates: validates input
//! shape, delegates hashing to [`password`](crate::password), classification
//! to [`resolver`](crate::resolver), and persistence to the injected
//! [`DocumentStore`]. Stateless across calls.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use warung_store::core::DocumentStore;
use warung_store::error::{BackendError, StoreError};
use warung_store::filter::FilterSet;

use crate::account::{Account, AccountUpdate, Registration};
use crate::error::{AuthError, AuthResult};
use crate::{password, resolver};

/// The collection holding account records.
pub const USERS_COLLECTION: &str = "users";

/// A successful login: the account's identifier plus its (redacted) record.
///
/// This is caller-held identity, not a session — the server keeps nothing.
#[derive(Debug, Clone)]
pub struct LoginSession {
    /// The account's store-assigned identifier.
    pub id: String,
    /// The account record, with branch-login redaction applied.
    pub account: Account,
}

/// Registration, login, and account management over an injected store.
pub struct AuthService<S> {
    store: Arc<S>,
}

impl<S> Clone for AuthService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: DocumentStore> AuthService<S> {
    /// Creates a service persisting to `store`.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Registers a new account and returns its assigned identifier.
    ///
    /// The credential is hashed before anything is persisted. If the store
    /// call fails after hashing, the attempt is simply abandoned — nothing
    /// was written, so there is nothing to roll back.
    ///
    /// # Errors
    ///
    /// * [`AuthError::Validation`] - incomplete identity or empty fields
    /// * [`AuthError::Store`] - the persist failed
    pub async fn register(&self, registration: Registration) -> AuthResult<String> {
        registration.validate()?;

        let digest = password::hash_password(registration.password()).await?;
        let role = registration.role();
        let account = registration.into_account(digest);

        let record = serde_json::to_value(&account).map_err(|e| {
            StoreError::from(BackendError::Corrupt {
                collection: USERS_COLLECTION.to_string(),
                message: e.to_string(),
            })
        })?;

        let doc = self.store.create(USERS_COLLECTION, record).await?;
        debug!(id = %doc.id(), role = ?role, "account registered");

        Ok(doc.id().to_string())
    }

    /// Verifies a login and returns the caller-held identity record.
    ///
    /// The code is classified as a store or branch code and the matching
    /// account looked up accordingly. A nonexistent code, a username
    /// mismatch, and a wrong password are indistinguishable: all three are
    /// [`AuthError::Unauthorized`].
    pub async fn login(
        &self,
        code: &str,
        username: &str,
        password: &str,
    ) -> AuthResult<LoginSession> {
        if code.is_empty() || username.is_empty() || password.is_empty() {
            return Err(AuthError::Validation(
                "kode, username, and password are required".to_string(),
            ));
        }

        let filters = FilterSet::from(resolver::account_filter(code));
        let Some(doc) = self.store.find_first(USERS_COLLECTION, &filters).await? else {
            return Err(AuthError::Unauthorized);
        };

        let account = parse_account(doc.content())?;
        if account.username != username {
            return Err(AuthError::Unauthorized);
        }

        if !password::verify_password(password, &account.password_hash).await? {
            return Err(AuthError::Unauthorized);
        }

        debug!(id = %doc.id(), role = ?account.role, "login verified");

        Ok(LoginSession {
            id: doc.id().to_string(),
            account: account.redacted_for_login(),
        })
    }

    /// Applies a partial update to an account, re-hashing a supplied
    /// password. Returns the account's identifier.
    ///
    /// # Errors
    ///
    /// * [`AuthError::Validation`] - no fields supplied
    /// * [`AuthError::Store`] - unknown identifier or failed persist
    pub async fn update_account(&self, id: &str, update: AccountUpdate) -> AuthResult<String> {
        if update.is_empty() {
            return Err(AuthError::Validation("no fields supplied".to_string()));
        }

        let digest = match update.password.as_deref() {
            Some(plaintext) if !plaintext.is_empty() => {
                Some(password::hash_password(plaintext).await?)
            }
            _ => None,
        };

        let partial = update.into_partial(digest);
        self.store.update(USERS_COLLECTION, id, partial).await?;
        debug!(id = %id, "account updated");

        Ok(id.to_string())
    }

    /// Deletes an account by identifier.
    pub async fn delete_account(&self, id: &str) -> AuthResult<()> {
        self.store.delete(USERS_COLLECTION, id).await?;
        debug!(id = %id, "account deleted");
        Ok(())
    }
}

/// Deserializes a stored account record.
///
/// A record that no longer parses is a corrupt store entry, reported as an
/// infrastructure failure rather than an authorization outcome.
fn parse_account(content: &Value) -> AuthResult<Account> {
    serde_json::from_value(content.clone()).map_err(|e| {
        AuthError::Store(StoreError::from(BackendError::Corrupt {
            collection: USERS_COLLECTION.to_string(),
            message: e.to_string(),
        }))
    })
}
