//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Path of the login screen, where visitors without a session are sent.
pub const LOGIN_PATH: &str = "/";

/// Whether a guarded page should bounce the visitor back to login.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    state.restored && state.username.is_none()
}

/// Redirect to the login screen whenever the session is known to be empty.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate(LOGIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
