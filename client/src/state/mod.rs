//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `home`) so pages and panels depend
//! on small focused models.

pub mod home;
pub mod session;
