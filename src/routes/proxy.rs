//! `/api/*` forwarding to the backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this host. Requests under `/api` are
//! replayed against the backend with the headers that carry the session
//! (`Cookie`, `Authorization`) and the backend's `Set-Cookie` comes back
//! untouched, so the backend's cookie lives on this origin.
//!
//! ERROR HANDLING
//! ==============
//! Upstream failures are answered in the backend's own `{"detail": ...}`
//! envelope so the client renders them like any backend error.

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Json, Response};

use crate::state::AppState;

/// Largest request body forwarded upstream.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Mount point of the forwarder; stripped before the path goes upstream.
pub const API_PREFIX: &str = "/api";

const REQUEST_HEADERS: [HeaderName; 4] = [ACCEPT, AUTHORIZATION, CONTENT_TYPE, COOKIE];
const RESPONSE_HEADERS: [HeaderName; 3] = [CONTENT_TYPE, LOCATION, SET_COOKIE];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("request body exceeds {MAX_BODY_BYTES} bytes")]
    TooLarge,
    #[error("request body unreadable: {0}")]
    BadBody(String),
    #[error("backend did not respond in time")]
    Timeout,
    #[error("backend unreachable: {0}")]
    Upstream(reqwest::Error),
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { Self::Timeout } else { Self::Upstream(err) }
    }
}

impl From<BytesRejection> for ProxyError {
    fn from(rejection: BytesRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::TooLarge
        } else {
            Self::BadBody(rejection.body_text())
        }
    }
}

impl ProxyError {
    fn status(&self) -> StatusCode {
        match self {
            Self::TooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::BadBody(_) => StatusCode::BAD_REQUEST,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(serde_json::json!({ "detail": self.to_string() }))).into_response()
    }
}

/// Backend URL for a proxied path and optional query string.
pub(crate) fn upstream_url(backend_url: &str, path: &str, query: Option<&str>) -> String {
    let path = path.trim_start_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(query) => format!("{backend_url}/{path}?{query}"),
        None => format!("{backend_url}/{path}"),
    }
}

/// Upstream path for a request URI, still percent-encoded as the client sent it.
pub(crate) fn upstream_path(uri: &Uri) -> &str {
    let path = uri.path();
    path.strip_prefix(API_PREFIX).unwrap_or(path)
}

/// Copy the allow-listed headers, keeping repeated values (e.g. `Set-Cookie`).
pub(crate) fn copy_headers(source: &HeaderMap, allowed: &[HeaderName]) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in allowed {
        for value in source.get_all(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// `ANY /api/{*path}` — replay the request against the backend.
///
/// The body limit comes from the router's `DefaultBodyLimit`.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ProxyError> {
    let path = upstream_path(&uri);
    let body = body.map_err(|rejection| {
        let err = ProxyError::from(rejection);
        tracing::warn!(%method, %path, error = %err, "rejected request body");
        err
    })?;
    let url = upstream_url(&state.backend_url, path, uri.query());

    let upstream = state
        .http
        .request(method.clone(), &url)
        .headers(copy_headers(&headers, &REQUEST_HEADERS))
        .body(body)
        .send()
        .await
        .map_err(|e| {
            let err = ProxyError::from(e);
            tracing::warn!(%method, %path, error = %err, "backend request failed");
            err
        })?;

    let status = upstream.status();
    let headers = copy_headers(upstream.headers(), &RESPONSE_HEADERS);
    let bytes = upstream.bytes().await?;
    tracing::debug!(%method, %path, status = status.as_u16(), "proxied");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
