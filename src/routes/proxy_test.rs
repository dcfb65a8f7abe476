use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum::extract::RawQuery;
use axum::http::HeaderMap;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::routing::{delete, get, post};
use serde_json::{Value, json};

use super::*;
use crate::routes::api_routes;

// =============================================================================
// HELPERS
// =============================================================================

async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// Minimal stand-in for the backend's session-cookie API.
fn stub_backend() -> Router {
    Router::new()
        .route(
            "/allservices",
            get(|| async { Json(json!([{ "service_id": 1, "name": "Plumbing", "description": "Pipes" }])) }),
        )
        .route(
            "/login",
            post(|Json(body): Json<Value>| async move {
                if body["password"] == "secret" {
                    (
                        StatusCode::OK,
                        [(SET_COOKIE, "session=abc; path=/; httponly")],
                        Json(json!({ "message": "user Login successful" })),
                    )
                        .into_response()
                } else {
                    (StatusCode::BAD_REQUEST, Json(json!({ "detail": "Incorrect password" }))).into_response()
                }
            }),
        )
        .route(
            "/profile",
            get(|headers: HeaderMap| async move {
                let cookie = headers.get(COOKIE).and_then(|v| v.to_str().ok()).unwrap_or_default();
                if cookie.contains("session=abc") {
                    Json(json!({ "user_id": 7, "username": "alice", "email": "a@x.test", "mobile": "1" }))
                        .into_response()
                } else {
                    (StatusCode::UNAUTHORIZED, Json(json!({ "detail": "Not authenticated" }))).into_response()
                }
            }),
        )
        .route("/echo-uri/{*rest}", get(|uri: Uri| async move { uri.to_string() }))
        .route("/addresses/{id}", delete(|| async { StatusCode::NO_CONTENT }))
        .route("/echo-body", post(|body: Bytes| async move { body.len().to_string() }))
        .route("/echo-query", get(|RawQuery(query): RawQuery| async move { query.unwrap_or_default() }))
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "late"
            }),
        )
}

async fn proxy_to(backend_url: &str, timeout: Duration) -> String {
    let http = reqwest::Client::builder().timeout(timeout).build().unwrap();
    let state = AppState::with_client(http, backend_url);
    let addr = serve(api_routes(state)).await;
    format!("http://{addr}")
}

async fn proxy_with_stub() -> String {
    let backend = serve(stub_backend()).await;
    proxy_to(&format!("http://{backend}/"), Duration::from_secs(5)).await
}

// =============================================================================
// PURE HELPERS
// =============================================================================

#[test]
fn upstream_url_joins_path_and_query() {
    assert_eq!(upstream_url("http://b:8000", "allservices", None), "http://b:8000/allservices");
    assert_eq!(upstream_url("http://b:8000", "/addresses/3", Some("x=1")), "http://b:8000/addresses/3?x=1");
    assert_eq!(upstream_url("http://b:8000", "profile", Some("")), "http://b:8000/profile");
}

#[test]
fn copy_headers_keeps_only_allowed_and_repeats() {
    let mut source = HeaderMap::new();
    source.append(SET_COOKIE, "a=1".parse().unwrap());
    source.append(SET_COOKIE, "b=2".parse().unwrap());
    source.insert("x-internal", "secret".parse().unwrap());

    let copied = copy_headers(&source, &RESPONSE_HEADERS);
    let cookies: Vec<_> = copied.get_all(SET_COOKIE).iter().map(|v| v.to_str().unwrap()).collect();
    assert_eq!(cookies, vec!["a=1", "b=2"]);
    assert!(copied.get("x-internal").is_none());
}

#[test]
fn upstream_path_strips_prefix_and_keeps_encoding() {
    let uri: Uri = "/api/addresses/1%3Fadmin%3Dtrue?x=1".parse().unwrap();
    assert_eq!(upstream_path(&uri), "/addresses/1%3Fadmin%3Dtrue");
    let uri: Uri = "/api/a%2Fb".parse().unwrap();
    assert_eq!(upstream_path(&uri), "/a%2Fb");
}

#[test]
fn proxy_error_statuses() {
    assert_eq!(ProxyError::Timeout.status(), StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(ProxyError::TooLarge.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(ProxyError::BadBody("stream reset".to_owned()).status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// FORWARDING
// =============================================================================

#[tokio::test]
async fn forwards_get_and_returns_backend_json() {
    let base = proxy_with_stub().await;
    let resp = reqwest::get(format!("{base}/api/allservices")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let services: Vec<wire::Service> = resp.json().await.unwrap();
    assert_eq!(services.len(), 1);
    assert_eq!(services[0].name, "Plumbing");
}

#[tokio::test]
async fn login_set_cookie_passes_through() {
    let base = proxy_with_stub().await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/api/login"))
        .json(&json!({ "username": "alice", "password": "secret" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = resp.headers().get(SET_COOKIE).and_then(|v| v.to_str().ok()).unwrap_or_default().to_owned();
    assert!(cookie.starts_with("session=abc"), "unexpected cookie {cookie:?}");
    let body: wire::MessageResponse = resp.json().await.unwrap();
    assert_eq!(body.message, "user Login successful");
}

#[tokio::test]
async fn backend_errors_keep_status_and_detail() {
    let base = proxy_with_stub().await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/api/login"))
        .json(&json!({ "username": "alice", "password": "wrong" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let text = resp.text().await.unwrap();
    assert_eq!(wire::error_detail(&text).as_deref(), Some("Incorrect password"));
}

#[tokio::test]
async fn request_cookie_is_forwarded() {
    let base = proxy_with_stub().await;
    let client = reqwest::Client::new();

    let anonymous = client.get(format!("{base}/api/profile")).send().await.unwrap();
    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);

    let resp = client
        .get(format!("{base}/api/profile"))
        .header(COOKIE, "session=abc")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let profile: wire::Profile = resp.json().await.unwrap();
    assert_eq!(profile.username, "alice");
}

#[tokio::test]
async fn query_string_is_forwarded() {
    let base = proxy_with_stub().await;
    let text = reqwest::get(format!("{base}/api/echo-query?page=2&size=10"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(text, "page=2&size=10");
}

#[tokio::test]
async fn encoded_path_reaches_backend_unchanged() {
    let base = proxy_with_stub().await;
    let text = reqwest::get(format!("{base}/api/echo-uri/1%3Fadmin%3Dtrue"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(text, "/echo-uri/1%3Fadmin%3Dtrue");

    let text = reqwest::get(format!("{base}/api/echo-uri/a%2Fb?page=2"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(text, "/echo-uri/a%2Fb?page=2");
}

#[tokio::test]
async fn delete_no_content_passes_through() {
    let base = proxy_with_stub().await;
    let resp = reqwest::Client::new()
        .delete(format!("{base}/api/addresses/4"))
        .header(COOKIE, "session=abc")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(resp.bytes().await.unwrap().is_empty());
}

#[tokio::test]
async fn body_within_limit_is_forwarded() {
    let base = proxy_with_stub().await;
    let text = reqwest::Client::new()
        .post(format!("{base}/api/echo-body"))
        .body(vec![b'x'; 1024])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(text, "1024");
}

#[tokio::test]
async fn oversized_body_is_payload_too_large() {
    let base = proxy_with_stub().await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/api/echo-body"))
        .body(vec![b'x'; MAX_BODY_BYTES + 1])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let text = resp.text().await.unwrap();
    assert!(wire::error_detail(&text).is_some_and(|d| d.starts_with("request body exceeds")));
}

#[tokio::test]
async fn unreachable_backend_is_bad_gateway() {
    // Bind then drop a listener to get a port nothing listens on.
    let closed = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let base = proxy_to(&format!("http://{closed}"), Duration::from_secs(5)).await;
    let resp = reqwest::get(format!("{base}/api/allservices")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let text = resp.text().await.unwrap();
    assert!(wire::error_detail(&text).is_some_and(|d| d.starts_with("backend unreachable")));
}

#[tokio::test]
async fn slow_backend_is_gateway_timeout() {
    let backend = serve(stub_backend()).await;
    let base = proxy_to(&format!("http://{backend}"), Duration::from_millis(200)).await;
    let resp = reqwest::get(format!("{base}/api/slow")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::GATEWAY_TIMEOUT);
}

#[tokio::test]
async fn healthz_is_ok() {
    let base = proxy_to("http://127.0.0.1:9", Duration::from_secs(1)).await;
    let resp = reqwest::get(format!("{base}/healthz")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
