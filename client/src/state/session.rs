//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend authenticates with its own cookie; the client only carries the
//! username from the login screen to the home screen. Route guards read this
//! state to decide when to send the visitor back to login.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Logged-in username plus whether it has been restored from storage yet.
///
/// `restored` stays `false` during SSR and until the browser has read
/// `sessionStorage`, so guards do not redirect before the username is known.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub username: Option<String>,
    pub restored: bool,
}

impl SessionState {
    /// State after a successful login.
    #[must_use]
    pub fn logged_in(username: &str) -> Self {
        Self { username: Some(username.to_owned()), restored: true }
    }

    /// State after logout: known to be empty.
    #[must_use]
    pub fn logged_out() -> Self {
        Self { username: None, restored: true }
    }

    /// Greeting shown at the top of the home screen.
    #[must_use]
    pub fn greeting(&self) -> String {
        format!("Hi, {}!", self.username.as_deref().unwrap_or_default())
    }
}
