//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Privileged routes apply identical role-redirect behavior: once the session
//! is loaded, any user whose role is not the privileged one is sent home.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use linkflow::session::{HOME_ROUTE, requires_redirect};

use crate::state::auth::AuthState;

/// Whether a privileged-only route must leave for `state`.
#[must_use]
pub fn should_redirect_unprivileged(state: &AuthState) -> bool {
    !state.loading && requires_redirect(state.user.as_ref())
}

/// Whether a privileged-only route may render its content for `state`.
#[must_use]
pub fn may_render_privileged(state: &AuthState) -> bool {
    !state.loading && !requires_redirect(state.user.as_ref())
}

/// Replace the current route with `/home` whenever the loaded session lacks
/// the privileged role.
pub fn install_role_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        redirect_unprivileged(auth, &navigate);
    });
}

/// Navigate to `/home` (replacing history) if `auth` must leave a
/// privileged route. Returns whether it navigated.
pub fn redirect_unprivileged<F>(auth: RwSignal<AuthState>, navigate: &F) -> bool
where
    F: Fn(&str, NavigateOptions),
{
    let leave = auth.with(should_redirect_unprivileged);
    if leave {
        navigate(HOME_ROUTE, NavigateOptions { replace: true, ..NavigateOptions::default() });
    }
    leave
}
