//! Username persistence across page reloads.
//!
//! Mirrors the session username into `sessionStorage` so a reload of the home
//! screen keeps its greeting. The value dies with the tab, like the backend's
//! session cookie. Requires a browser environment; no-ops elsewhere.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "service_connect_username";

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

/// Read the username saved by the last login in this tab.
pub fn read_username() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage()?
            .get_item(STORAGE_KEY)
            .ok()
            .flatten()
            .filter(|name| !name.is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Save the username after a successful login.
pub fn write_username(username: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.set_item(STORAGE_KEY, username);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = username;
    }
}

/// Forget the saved username on logout.
pub fn clear_username() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
