use std::{collections::HashMap, time::Duration};

use spotcurator::{
    config::{Config, DEFAULT_API_URL, DEFAULT_MARKET, DEFAULT_TIMEOUT, DEFAULT_TOKEN_URL},
    error::ConfigError,
};

fn from_map(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_vars(|name| vars.get(name).cloned())
}

#[test]
fn test_config_defaults() {
    let config = from_map(&[
        ("SPOTIFY_CLIENT_ID", "id"),
        ("SPOTIFY_CLIENT_SECRET", "secret"),
    ])
    .unwrap();

    assert_eq!(config.client_id, "id");
    assert_eq!(config.client_secret, "secret");
    assert_eq!(config.token_url, DEFAULT_TOKEN_URL);
    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert_eq!(config.market, DEFAULT_MARKET);
    assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    assert_eq!(config, Config::new("id", "secret"));
}

#[test]
fn test_config_overrides() {
    let config = from_map(&[
        ("SPOTIFY_CLIENT_ID", "id"),
        ("SPOTIFY_CLIENT_SECRET", "secret"),
        ("SPOTIFY_API_TOKEN_URL", "http://localhost:9000/api/token"),
        ("SPOTIFY_API_URL", "http://localhost:9000/v1/"),
        ("SPOTIFY_MARKET", "US"),
        ("SPOTIFY_HTTP_TIMEOUT_SECS", "5"),
    ])
    .unwrap();

    assert_eq!(config.token_url, "http://localhost:9000/api/token");
    assert_eq!(config.api_url, "http://localhost:9000/v1");
    assert_eq!(config.market, "US");
    assert_eq!(config.timeout, Duration::from_secs(5));
}

#[test]
fn test_config_missing_client_id() {
    let err = from_map(&[("SPOTIFY_CLIENT_SECRET", "secret")]).unwrap_err();

    assert!(matches!(err, ConfigError::Missing("SPOTIFY_CLIENT_ID")));
}

#[test]
fn test_config_blank_secret_is_missing() {
    let err = from_map(&[
        ("SPOTIFY_CLIENT_ID", "id"),
        ("SPOTIFY_CLIENT_SECRET", "   "),
    ])
    .unwrap_err();

    assert!(matches!(err, ConfigError::Missing("SPOTIFY_CLIENT_SECRET")));
}

#[test]
fn test_config_invalid_timeout() {
    for raw in ["soon", "0", "-3"] {
        let err = from_map(&[
            ("SPOTIFY_CLIENT_ID", "id"),
            ("SPOTIFY_CLIENT_SECRET", "secret"),
            ("SPOTIFY_HTTP_TIMEOUT_SECS", raw),
        ])
        .unwrap_err();

        assert!(
            matches!(err, ConfigError::Invalid { name: "SPOTIFY_HTTP_TIMEOUT_SECS", .. }),
            "{} should be rejected",
            raw
        );
    }
}

#[test]
fn test_config_debug_redacts_secret() {
    let config = Config::new("id", "super-secret-value");

    let debug = format!("{:?}", config);

    assert!(debug.contains("id"));
    assert!(!debug.contains("super-secret-value"));
}
