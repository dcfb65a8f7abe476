//! Small browser and formatting helpers shared by pages and components.

pub mod auth;
pub mod format;
pub mod session_store;
