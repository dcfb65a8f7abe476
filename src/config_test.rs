use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn from_lookup_uses_defaults_when_unset() {
    let cfg = HostConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(
        cfg.timeouts,
        ProxyTimeouts { request_secs: DEFAULT_PROXY_TIMEOUT_SECS, connect_secs: DEFAULT_PROXY_CONNECT_TIMEOUT_SECS }
    );
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = HostConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("BACKEND_URL", "https://api.example.test/"),
        ("PROXY_TIMEOUT_SECS", "12"),
        ("PROXY_CONNECT_TIMEOUT_SECS", "2"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.backend_url, "https://api.example.test");
    assert_eq!(cfg.timeouts, ProxyTimeouts { request_secs: 12, connect_secs: 2 });
    assert_eq!(cfg.timeouts.request(), Duration::from_secs(12));
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = HostConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("eighty".to_owned()));
}

#[test]
fn from_lookup_rejects_non_http_backend() {
    let err = HostConfig::from_lookup(lookup_from(&[("BACKEND_URL", "localhost:8000")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBackendUrl("localhost:8000".to_owned()));

    let err = HostConfig::from_lookup(lookup_from(&[("BACKEND_URL", "http://")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBackendUrl("http://".to_owned()));
}

#[test]
fn invalid_or_zero_timeouts_fall_back_to_defaults() {
    let cfg = HostConfig::from_lookup(lookup_from(&[("PROXY_TIMEOUT_SECS", "soon"), ("PROXY_CONNECT_TIMEOUT_SECS", "0")]))
        .unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_PROXY_TIMEOUT_SECS);
    assert_eq!(cfg.timeouts.connect_secs, DEFAULT_PROXY_CONNECT_TIMEOUT_SECS);
}
