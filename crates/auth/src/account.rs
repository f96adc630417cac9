//! Account records and registration requests.
//!
//! Wire field names keep the platform's original Indonesian labels
//! (`kodeToko`, `namaCabang`, ...) so existing clients keep working.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{AuthError, AuthResult};

/// The role derived for an account at registration.
///
/// Never supplied by the caller; it follows from which tenant identity the
/// registration carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Store-level principal.
    Owner,
    /// Branch-level principal.
    Branch,
}

/// One login principal, as persisted in the `users` collection.
///
/// Exactly one of `store_name` (with role [`Role::Owner`]) or `branch_name`
/// (with role [`Role::Branch`]) is populated. A branch account carries its
/// own `branch_code` and its parent store's `store_code`, which may be empty
/// at registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// The owning store's code (`kodeToko`).
    #[serde(rename = "kodeToko", default, skip_serializing_if = "Option::is_none")]
    pub store_code: Option<String>,

    /// The store's display name (`namaToko`); owner accounts only.
    #[serde(rename = "namaToko", default, skip_serializing_if = "Option::is_none")]
    pub store_name: Option<String>,

    /// The branch's code (`kodeCabang`); branch accounts only.
    #[serde(rename = "kodeCabang", default, skip_serializing_if = "Option::is_none")]
    pub branch_code: Option<String>,

    /// The branch's display name (`namaCabang`); branch accounts only.
    #[serde(rename = "namaCabang", default, skip_serializing_if = "Option::is_none")]
    pub branch_name: Option<String>,

    /// Caller-chosen handle. Uniqueness is not enforced by this layer.
    pub username: String,

    /// Salted one-way digest of the credential; never the plaintext.
    #[serde(rename = "hashedPassword")]
    pub password_hash: String,

    /// Derived role.
    pub role: Role,
}

impl Account {
    /// Applies the display-name redaction for a login response.
    ///
    /// Branch logins are not shown the parent store's display name; the
    /// store code itself stays visible as persisted.
    #[must_use]
    pub fn redacted_for_login(mut self) -> Self {
        if self.role == Role::Branch {
            self.store_name = None;
        }
        self
    }
}

/// A discriminated registration request.
///
/// The wire shape is the original optional-field payload; deserialization
/// resolves it into an explicit variant. A payload carrying a complete store
/// identity (`kodeToko` + `namaToko`) registers as owner even when branch
/// fields are also present — store identity takes precedence. A payload with
/// neither complete pair fails to parse.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Registration {
    /// Registers a store owner.
    Store(StoreRegistration),
    /// Registers a branch operator.
    Branch(BranchRegistration),
}

/// Registration payload for a store owner.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreRegistration {
    /// The store's code (`kodeToko`).
    #[serde(rename = "kodeToko")]
    pub store_code: String,

    /// The store's display name (`namaToko`).
    #[serde(rename = "namaToko")]
    pub store_name: String,

    /// Caller-chosen handle.
    pub username: String,

    /// Plaintext credential; hashed before anything is persisted.
    pub password: String,
}

/// Registration payload for a branch operator.
#[derive(Debug, Clone, Deserialize)]
pub struct BranchRegistration {
    /// The parent store's code (`kodeToko`); may be absent or empty.
    #[serde(rename = "kodeToko", default)]
    pub store_code: Option<String>,

    /// The branch's code (`kodeCabang`).
    #[serde(rename = "kodeCabang")]
    pub branch_code: String,

    /// The branch's display name (`namaCabang`).
    #[serde(rename = "namaCabang")]
    pub branch_name: String,

    /// Caller-chosen handle.
    pub username: String,

    /// Plaintext credential; hashed before anything is persisted.
    pub password: String,
}

impl Registration {
    /// Parses a registration from a raw JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Validation`] when neither a complete store
    /// identity nor a complete branch identity is supplied.
    pub fn from_value(payload: Value) -> AuthResult<Self> {
        serde_json::from_value(payload).map_err(|_| {
            AuthError::Validation(
                "neither store nor branch identity supplied".to_string(),
            )
        })
    }

    /// Returns the caller-chosen handle.
    pub fn username(&self) -> &str {
        match self {
            Registration::Store(r) => &r.username,
            Registration::Branch(r) => &r.username,
        }
    }

    /// Returns the plaintext credential.
    pub fn password(&self) -> &str {
        match self {
            Registration::Store(r) => &r.password,
            Registration::Branch(r) => &r.password,
        }
    }

    /// Returns the role this registration derives.
    pub fn role(&self) -> Role {
        match self {
            Registration::Store(_) => Role::Owner,
            Registration::Branch(_) => Role::Branch,
        }
    }

    /// Checks that every required field is non-empty.
    ///
    /// Empty strings are treated as absent, matching the platform's
    /// original behavior.
    pub fn validate(&self) -> AuthResult<()> {
        if self.username().is_empty() || self.password().is_empty() {
            return Err(AuthError::Validation(
                "username and password are required".to_string(),
            ));
        }

        let identity_complete = match self {
            Registration::Store(r) => !r.store_code.is_empty() && !r.store_name.is_empty(),
            Registration::Branch(r) => !r.branch_code.is_empty() && !r.branch_name.is_empty(),
        };
        if !identity_complete {
            return Err(AuthError::Validation(
                "neither store nor branch identity supplied".to_string(),
            ));
        }

        Ok(())
    }

    /// Builds the account record to persist, with the hashed credential.
    pub fn into_account(self, password_hash: String) -> Account {
        match self {
            Registration::Store(r) => Account {
                store_code: Some(r.store_code),
                store_name: Some(r.store_name),
                branch_code: None,
                branch_name: None,
                username: r.username,
                password_hash,
                role: Role::Owner,
            },
            Registration::Branch(r) => Account {
                store_code: r.store_code,
                store_name: None,
                branch_code: Some(r.branch_code),
                branch_name: Some(r.branch_name),
                username: r.username,
                password_hash,
                role: Role::Branch,
            },
        }
    }
}

/// A partial account update.
///
/// All fields are optional; an update carrying none of them is rejected. A
/// supplied password is re-hashed — the stored digest is replaced, nothing
/// else is touched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountUpdate {
    /// New store code (`kodeToko`).
    #[serde(rename = "kodeToko", default)]
    pub store_code: Option<String>,

    /// New store display name (`namaToko`).
    #[serde(rename = "namaToko", default)]
    pub store_name: Option<String>,

    /// New branch code (`kodeCabang`).
    #[serde(rename = "kodeCabang", default)]
    pub branch_code: Option<String>,

    /// New branch display name (`namaCabang`).
    #[serde(rename = "namaCabang", default)]
    pub branch_name: Option<String>,

    /// New handle.
    #[serde(default)]
    pub username: Option<String>,

    /// New plaintext credential, re-hashed before persisting.
    #[serde(default)]
    pub password: Option<String>,
}

impl AccountUpdate {
    /// Returns `true` if no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.store_code.is_none()
            && self.store_name.is_none()
            && self.branch_code.is_none()
            && self.branch_name.is_none()
            && self.username.is_none()
            && self.password.is_none()
    }

    /// Builds the merge record, substituting `password_hash` for the
    /// plaintext password field when one was supplied.
    pub(crate) fn into_partial(self, password_hash: Option<String>) -> Value {
        let mut fields = Map::new();
        if let Some(v) = self.store_code {
            fields.insert("kodeToko".to_string(), Value::String(v));
        }
        if let Some(v) = self.store_name {
            fields.insert("namaToko".to_string(), Value::String(v));
        }
        if let Some(v) = self.branch_code {
            fields.insert("kodeCabang".to_string(), Value::String(v));
        }
        if let Some(v) = self.branch_name {
            fields.insert("namaCabang".to_string(), Value::String(v));
        }
        if let Some(v) = self.username {
            fields.insert("username".to_string(), Value::String(v));
        }
        if let Some(v) = password_hash {
            fields.insert("hashedPassword".to_string(), Value::String(v));
        }
        Value::Object(fields)
    }
}
