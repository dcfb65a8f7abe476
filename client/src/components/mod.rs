//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the home screen's request cards and right-hand panels.
//! Each panel owns its fetch and local view state.

pub mod address_book;
pub mod all_services;
pub mod create_request;
pub mod profile;
pub mod request_card;
