//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login itself happens elsewhere; this module only reads the persisted
//! session (user id, role, bank-linked flag) from `localStorage` and exposes
//! it to route guards and the bank-link flow through `AuthSession`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use linkflow::{SessionStore, SessionUser};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::util::storage;

/// `localStorage` key holding the persisted session.
pub const AUTH_STORAGE_KEY: &str = "auth-storage";

/// Authentication state tracking the current user and bank-link status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub bank_linked: bool,
    /// The persisted session has not been read yet (always true during SSR).
    pub loading: bool,
}

/// Persisted envelope: `{ "state": { ... }, "version": n }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
struct PersistedAuth {
    #[serde(default)]
    state: PersistedAuthFields,
    #[serde(default)]
    version: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedAuthFields {
    #[serde(default)]
    user_logged_in: Option<SessionUser>,
    #[serde(default)]
    bank_linked: bool,
}

impl AuthState {
    /// State before the persisted session is available.
    #[must_use]
    pub fn pending() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Read the persisted session. Missing or malformed data yields a
    /// logged-out state.
    #[must_use]
    pub fn load() -> Self {
        storage::load_json::<PersistedAuth>(AUTH_STORAGE_KEY).map_or_else(Self::default, Self::from_persisted)
    }

    /// Write the bank-linked flag back to `localStorage`.
    ///
    /// The entry belongs to the auth layer, so only `state.bankLinked` is
    /// replaced; unknown keys and the envelope version are kept as stored.
    pub fn persist(&self) {
        let stored = storage::load_json::<Value>(AUTH_STORAGE_KEY);
        storage::save_json(AUTH_STORAGE_KEY, &self.merged_into(stored));
    }

    fn merged_into(&self, stored: Option<Value>) -> Value {
        if let Some(mut envelope) = stored {
            if let Some(fields) = envelope.get_mut("state").and_then(Value::as_object_mut) {
                fields.insert("bankLinked".to_owned(), Value::Bool(self.bank_linked));
                return envelope;
            }
        }
        serde_json::to_value(self.to_persisted()).unwrap_or_default()
    }

    fn from_persisted(persisted: PersistedAuth) -> Self {
        Self {
            user: persisted.state.user_logged_in,
            bank_linked: persisted.state.bank_linked,
            loading: false,
        }
    }

    fn to_persisted(&self) -> PersistedAuth {
        PersistedAuth {
            state: PersistedAuthFields { user_logged_in: self.user.clone(), bank_linked: self.bank_linked },
            version: 0,
        }
    }
}

/// Session store view over the shared auth signal.
#[derive(Clone, Copy, Debug)]
pub struct AuthSession(pub RwSignal<AuthState>);

impl SessionStore for AuthSession {
    fn current_user(&self) -> Option<SessionUser> {
        self.0.with_untracked(|auth| auth.user.clone())
    }

    fn bank_linked(&self) -> bool {
        self.0.with_untracked(|auth| auth.bank_linked)
    }

    fn set_bank_linked(&self, linked: bool) {
        self.0.update(|auth| auth.bank_linked = linked);
        self.0.with_untracked(AuthState::persist);
    }
}
