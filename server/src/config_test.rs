use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_host_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("BACKEND_URL");
        std::env::remove_var("BACKEND_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("BACKEND_CONNECT_TIMEOUT_SECS");
    }
}

#[test]
fn from_env_uses_defaults() {
    unsafe { clear_host_env() };

    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(
        cfg.timeouts,
        BackendTimeouts {
            request_secs: DEFAULT_BACKEND_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS,
        }
    );
}

#[test]
fn from_env_parses_overrides() {
    unsafe {
        clear_host_env();
        std::env::set_var("PORT", "4100");
        std::env::set_var("BACKEND_URL", "https://api.example.test/v1/");
        std::env::set_var("BACKEND_REQUEST_TIMEOUT_SECS", "42");
        std::env::set_var("BACKEND_CONNECT_TIMEOUT_SECS", "7");
    }

    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg.port, 4100);
    assert_eq!(cfg.backend_url, "https://api.example.test/v1");
    assert_eq!(cfg.timeouts, BackendTimeouts { request_secs: 42, connect_secs: 7 });

    unsafe { clear_host_env() };
}

#[test]
fn from_env_rejects_bad_port() {
    unsafe {
        clear_host_env();
        std::env::set_var("PORT", "http");
    }

    let err = HostConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("PORT"));

    unsafe { clear_host_env() };
}

#[test]
fn from_env_falls_back_on_unparseable_timeouts() {
    unsafe {
        clear_host_env();
        std::env::set_var("BACKEND_REQUEST_TIMEOUT_SECS", "soon");
    }

    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_BACKEND_REQUEST_TIMEOUT_SECS);

    unsafe { clear_host_env() };
}

#[test]
fn parse_backend_url_requires_http_scheme() {
    let err = parse_backend_url(Some("localhost:8080")).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "BACKEND_URL", .. }));
}

#[test]
fn parse_backend_url_trims_whitespace_and_slashes() {
    assert_eq!(parse_backend_url(Some(" http://backend:9000// ")).unwrap(), "http://backend:9000");
}

#[test]
fn http_client_builds_with_default_timeouts() {
    let cfg = HostConfig {
        port: DEFAULT_PORT,
        backend_url: DEFAULT_BACKEND_URL.to_owned(),
        timeouts: BackendTimeouts { request_secs: 1, connect_secs: 1 },
    };
    assert!(cfg.http_client().is_ok());
}
