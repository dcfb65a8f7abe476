//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (session checks, navigation) and
//! delegates panel rendering to `components`.

pub mod home;
pub mod login;
pub mod register;
