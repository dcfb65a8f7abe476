//! Shared request/response model for the Service Connect backend.
//!
//! This crate owns the JSON shapes exchanged with the backend and is used by
//! the `client` UI, the `service-connect` host, and the `cli`. Entities are
//! defined by the backend; only the fields the frontends render are declared
//! and optional fields tolerate being absent.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Backend endpoint paths, relative to the backend root.
pub mod endpoints {
    pub const LOGIN: &str = "/login";
    pub const LOGOUT: &str = "/logout";
    pub const SIGNUP: &str = "/signup";
    pub const PROFILE: &str = "/profile";
    pub const ALL_SERVICES: &str = "/allservices";
    pub const ALL_REQUESTS: &str = "/allrequests";
    pub const REQUESTS: &str = "/requests";
    pub const ADDRESSES: &str = "/addresses";

    /// Path of a single saved address.
    #[must_use]
    pub fn address(location_id: i64) -> String {
        format!("{ADDRESSES}/{location_id}")
    }
}

/// Error returned by the form-field parsers in this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    /// An id field did not contain a base-10 integer.
    #[error("{field} must be a number, got {value:?}")]
    InvalidId { field: &'static str, value: String },
}

// =============================================================================
// ENTITIES
// =============================================================================

/// A service offered on the platform (`GET /allservices`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub service_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// One of the current user's service requests (`GET /allrequests`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRequest {
    pub request_id: i64,
    /// Assigned worker, once a worker has accepted the request.
    #[serde(default)]
    pub worker_id: Option<i64>,
    pub service_id: i64,
    #[serde(default)]
    pub description: Option<String>,
    /// Free-form lifecycle label, see [`RequestStatus`].
    pub status: String,
    /// ISO 8601 creation timestamp as sent by the backend.
    pub created_at: String,
}

/// The logged-in user's account details (`GET /profile`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub mobile: String,
}

/// A saved service location (`GET /addresses`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub location_id: i64,
    pub user_id: i64,
    pub address: String,
    #[serde(default)]
    pub pincode: Option<String>,
}

// =============================================================================
// REQUEST BODIES
// =============================================================================

/// Body of `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body of `POST /signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub mobile: String,
    pub password: String,
}

/// Body of `POST /requests`.
///
/// Optional text fields serialize as JSON `null` rather than being omitted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewServiceRequest {
    pub service_id: i64,
    pub description: String,
    pub location_id: i64,
    pub urgency_level: Option<String>,
    pub additional_notes: Option<String>,
}

impl NewServiceRequest {
    /// Build a request body from raw form input.
    ///
    /// Ids are parsed as base-10 integers after trimming; blank optional text
    /// becomes `None`.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::InvalidId`] when either id is not an integer.
    pub fn from_form(
        service_id: &str,
        description: &str,
        location_id: &str,
        urgency_level: &str,
        additional_notes: &str,
    ) -> Result<Self, WireError> {
        Ok(Self {
            service_id: parse_id("service_id", service_id)?,
            description: description.to_owned(),
            location_id: parse_id("location_id", location_id)?,
            urgency_level: non_empty(urgency_level),
            additional_notes: non_empty(additional_notes),
        })
    }
}

/// Body of `POST /addresses`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAddress {
    pub address: String,
    pub pincode: String,
}

/// Editable contact details (`PUT /profile`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub email: String,
    pub mobile: String,
}

// =============================================================================
// RESPONSE ENVELOPES
// =============================================================================

/// `{"message": ...}` body returned by login, logout and signup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error envelope returned by the backend on non-2xx responses.
///
/// `detail` is usually a string, but validation failures send an array of
/// `{"loc": [...], "msg": "...", "type": "..."}` entries.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

/// Extract a human-readable message from an error response body.
///
/// Returns `None` when the body is not JSON, carries no `detail`, or the
/// detail is empty.
#[must_use]
pub fn error_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        Value::String(text) if !text.trim().is_empty() => Some(text),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        Value::Null | Value::String(_) => None,
        other => Some(other.to_string()),
    }
}

// =============================================================================
// STATUS
// =============================================================================

/// Known lifecycle states of a [`ServiceRequest`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestStatus {
    Pending,
    Negotiating,
    Accepted,
    InProgress,
    Completed,
    Cancelled,
    Other,
}

impl RequestStatus {
    /// Classify the backend's status label, case-insensitively.
    #[must_use]
    pub fn from_status(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" => Self::Pending,
            "negotiating" => Self::Negotiating,
            "accepted" => Self::Accepted,
            "inprogress" | "in_progress" | "in progress" => Self::InProgress,
            "completed" => Self::Completed,
            "cancelled" | "canceled" => Self::Cancelled,
            _ => Self::Other,
        }
    }

    /// CSS modifier applied next to the `status` class on request badges.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Negotiating => "negotiating",
            Self::Accepted => "accepted",
            Self::InProgress => "inprogress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Other => "other",
        }
    }
}

// =============================================================================
// FORM HELPERS
// =============================================================================

/// Parse a base-10 id from form input.
///
/// # Errors
///
/// Returns [`WireError::InvalidId`] when `raw` is not an integer.
pub fn parse_id(field: &'static str, raw: &str) -> Result<i64, WireError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| WireError::InvalidId { field, value: raw.to_owned() })
}

/// `None` for blank input, the input text otherwise.
#[must_use]
pub fn non_empty(raw: &str) -> Option<String> {
    if raw.trim().is_empty() { None } else { Some(raw.to_owned()) }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
