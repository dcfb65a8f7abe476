//! REST API helpers for communicating with the backend through the host.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser, where the session cookie lives.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<T, ApiError>`. Panels turn the error into a
//! single message string with [`ApiError::describe`] so fetch failures degrade
//! the view instead of crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;
use wire::{
    Address, LoginRequest, MessageResponse, NewAddress, NewServiceRequest, Profile, ProfileUpdate, Service,
    ServiceRequest, SignupRequest,
};
#[cfg(feature = "hydrate")]
use wire::endpoints;

/// Same-origin prefix the host forwards to the backend.
pub const API_PREFIX: &str = "/api";

/// Failure of a single API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    #[error("{}", detail.as_deref().unwrap_or(UNKNOWN_ERROR))]
    Http { status: u16, detail: Option<String> },
    /// The request never produced a usable response.
    #[error("{0}")]
    Network(String),
}

const UNKNOWN_ERROR: &str = "Unknown error";

impl ApiError {
    /// Render the error with the prefix matching its kind.
    ///
    /// HTTP failures read `"<http_prefix>: <detail>"`, falling back to
    /// `Unknown error` when the backend sent no detail. Transport failures
    /// read `"<network_prefix>: <message>"`.
    #[must_use]
    pub fn describe(&self, http_prefix: &str, network_prefix: &str) -> String {
        match self {
            Self::Http { .. } => format!("{http_prefix}: {self}"),
            Self::Network(_) => format!("{network_prefix}: {self}"),
        }
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn from_status(status: u16, body: &str) -> Self {
        Self::Http { status, detail: wire::error_detail(body) }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn api_url(endpoint: &str) -> String {
    format!("{API_PREFIX}{endpoint}")
}

#[cfg(not(feature = "hydrate"))]
fn unavailable<T>() -> Result<T, ApiError> {
    Err(ApiError::Network("not available on server".to_owned()))
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[cfg(feature = "hydrate")]
fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn ensure_ok(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::from_status(resp.status(), &body))
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(endpoint: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(&api_url(endpoint))
        .send()
        .await
        .map_err(network)?;
    ensure_ok(resp).await?.json::<T>().await.map_err(network)
}

#[cfg(feature = "hydrate")]
async fn post_json<B, T>(endpoint: &str, body: &B) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::post(&api_url(endpoint))
        .json(body)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    ensure_ok(resp).await?.json::<T>().await.map_err(network)
}

#[cfg(feature = "hydrate")]
async fn put_json<B, T>(endpoint: &str, body: &B) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::put(&api_url(endpoint))
        .json(body)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    ensure_ok(resp).await?.json::<T>().await.map_err(network)
}

// =============================================================================
// SESSION
// =============================================================================

/// Log in with `POST /login`. The backend sets its session cookie on success.
///
/// # Errors
///
/// Returns [`ApiError::Http`] for rejected credentials and
/// [`ApiError::Network`] when the request fails.
pub async fn login(credentials: &LoginRequest) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(endpoints::LOGIN, credentials).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        unavailable()
    }
}

/// End the backend session with `POST /logout`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects it.
pub async fn logout() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let _: Value = post_json(endpoints::LOGOUT, &serde_json::json!({})).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        unavailable()
    }
}

/// Create an account with `POST /signup`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects the details.
pub async fn signup(details: &SignupRequest) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(endpoints::SIGNUP, details).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = details;
        unavailable()
    }
}

// =============================================================================
// ACCOUNT
// =============================================================================

/// Fetch the logged-in user's details from `GET /profile`.
///
/// # Errors
///
/// Returns an error if the request fails or the session is not authenticated.
pub async fn fetch_profile() -> Result<Profile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(endpoints::PROFILE).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        unavailable()
    }
}

/// Change the logged-in user's email and mobile with `PUT /profile`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects the update.
pub async fn update_profile(update: &ProfileUpdate) -> Result<Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        put_json(endpoints::PROFILE, update).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = update;
        unavailable()
    }
}

/// Fetch saved addresses from `GET /addresses`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects it.
pub async fn fetch_addresses() -> Result<Vec<Address>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(endpoints::ADDRESSES).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        unavailable()
    }
}

/// Save a new address with `POST /addresses`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects it.
pub async fn add_address(address: &NewAddress) -> Result<Address, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(endpoints::ADDRESSES, address).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = address;
        unavailable()
    }
}

/// Remove an address with `DELETE /addresses/{location_id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the address is not found.
pub async fn delete_address(location_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&api_url(&endpoints::address(location_id)))
            .send()
            .await
            .map_err(network)?;
        ensure_ok(resp).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = location_id;
        unavailable()
    }
}

// =============================================================================
// SERVICES & REQUESTS
// =============================================================================

/// Fetch the service catalogue from `GET /allservices`.
///
/// # Errors
///
/// Returns an error if the request fails or the response is malformed.
pub async fn fetch_services() -> Result<Vec<Service>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(endpoints::ALL_SERVICES).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        unavailable()
    }
}

/// Fetch the current user's requests from `GET /allrequests`.
///
/// # Errors
///
/// Returns an error if the request fails or the session is not authenticated.
pub async fn fetch_requests() -> Result<Vec<ServiceRequest>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(endpoints::ALL_REQUESTS).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        unavailable()
    }
}

/// Submit a new service request with `POST /requests`.
///
/// Returns the backend's response body untouched so it can be echoed back.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects the body.
pub async fn create_request(request: &NewServiceRequest) -> Result<Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(endpoints::REQUESTS, request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        unavailable()
    }
}
