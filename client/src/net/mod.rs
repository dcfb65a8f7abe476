//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser never talks to the backend directly. Every call goes to the
//! same-origin `/api` prefix, which the host forwards to the backend together
//! with the backend's session cookie.

pub mod api;
