//! Session store seam and the privileged-role guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session (current user + bank-linked flag) is owned by the host
//! application and shared with other pages. The flow controller only reads the
//! user and flips the linked flag on a successful exchange.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// Role allowed to use the bank-linking page.
pub const PRIVILEGED_ROLE: &str = "admin";

/// Route non-privileged users are sent to.
pub const HOME_ROUTE: &str = "/home";

/// User identifier as stored by the auth layer.
///
/// The backend issues numeric ids but older sessions hold strings; either is
/// sent back in the form it was stored.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(serde_json::Number),
    Text(String),
}

impl UserId {
    /// An empty string id counts as no id.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl PartialEq<&str> for UserId {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Self::Text(s) if s == other)
    }
}

/// The authenticated user as persisted by the auth layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub user_id: UserId,
    pub user_role: String,
}

impl SessionUser {
    #[must_use]
    pub fn is_privileged(&self) -> bool {
        self.user_role == PRIVILEGED_ROLE
    }
}

/// Process-wide session state visible to many views.
pub trait SessionStore {
    /// The logged-in user, if any.
    fn current_user(&self) -> Option<SessionUser>;

    /// Whether the user's bank account is currently linked.
    fn bank_linked(&self) -> bool;

    /// Record the linked status.
    fn set_bank_linked(&self, linked: bool);

    /// Identifier of the logged-in user, if any.
    fn current_user_id(&self) -> Option<UserId> {
        self.current_user().map(|user| user.user_id).filter(|id| !id.is_empty())
    }
}

/// Whether a privileged-only page must redirect away for `user`.
#[must_use]
pub fn requires_redirect(user: Option<&SessionUser>) -> bool {
    !user.is_some_and(SessionUser::is_privileged)
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// In-memory session store.
    #[derive(Debug, Default)]
    pub struct MemorySession {
        pub user: RefCell<Option<SessionUser>>,
        pub linked: Cell<bool>,
        pub linked_writes: Cell<usize>,
    }

    impl MemorySession {
        #[must_use]
        pub fn with_user(user_id: &str, role: &str) -> Self {
            let session = Self::default();
            *session.user.borrow_mut() = Some(SessionUser { user_id: user_id.into(), user_role: role.to_owned() });
            session
        }

        #[must_use]
        pub fn admin() -> Self {
            Self::with_user("user-1", PRIVILEGED_ROLE)
        }
    }

    impl SessionStore for MemorySession {
        fn current_user(&self) -> Option<SessionUser> {
            self.user.borrow().clone()
        }

        fn bank_linked(&self) -> bool {
            self.linked.get()
        }

        fn set_bank_linked(&self, linked: bool) {
            self.linked.set(linked);
            self.linked_writes.set(self.linked_writes.get() + 1);
        }
    }
}
