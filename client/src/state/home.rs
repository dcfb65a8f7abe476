//! Home-screen view toggling.
//!
//! DESIGN
//! ======
//! The home screen keeps the request list on the left and swaps a single
//! panel on the right. Only one panel is mounted at a time, so each panel
//! fetches afresh whenever it is shown.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

/// Panel shown in the right-hand section of the home screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RightView {
    #[default]
    CreateRequest,
    Profile,
    Services,
}

impl RightView {
    /// Label of the button that selects this panel.
    #[must_use]
    pub fn button_label(self) -> &'static str {
        match self {
            Self::CreateRequest => "Create new request",
            Self::Profile => "Profile",
            Self::Services => "View Services",
        }
    }

    /// Panels in button order.
    pub const ALL: [Self; 3] = [Self::CreateRequest, Self::Profile, Self::Services];
}
