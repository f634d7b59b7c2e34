//! Configuration management for spotcurator.
//!
//! Credentials and endpoints are read once, by the binary, into a [`Config`]
//! value that is handed to the credential provider and catalog client. The
//! core never reads the environment itself.
//!
//! Values are resolved in this order:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory, then one in the working directory
//! 3. Application defaults (where applicable)

use std::{env, fmt, path::PathBuf, time::Duration};

use crate::error::ConfigError;

pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_MARKET: &str = "BR";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const CLIENT_ID: &str = "SPOTIFY_CLIENT_ID";
const CLIENT_SECRET: &str = "SPOTIFY_CLIENT_SECRET";
const TOKEN_URL: &str = "SPOTIFY_API_TOKEN_URL";
const API_URL: &str = "SPOTIFY_API_URL";
const MARKET: &str = "SPOTIFY_MARKET";
const TIMEOUT_SECS: &str = "SPOTIFY_HTTP_TIMEOUT_SECS";

/// Loads environment variables from `.env` files.
///
/// Looks for `spotcurator/.env` in the platform-specific local data directory
/// and then for a `.env` in the working directory. Both are optional; variables
/// already present in the process environment are never overwritten.
///
/// The directory is created if it doesn't exist so users know where to put
/// their file (`build.rs` drops a `.env.example` next to it).
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/spotcurator/.env`
/// - macOS: `~/Library/Application Support/spotcurator/.env`
/// - Windows: `%LOCALAPPDATA%/spotcurator/.env`
pub async fn load_env() -> Result<(), ConfigError> {
    let path = env_file_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| ConfigError::EnvFile(e.to_string()))?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| ConfigError::EnvFile(e.to_string()))?;
    }

    // a missing working-directory .env is fine
    let _ = dotenv::dotenv();
    Ok(())
}

fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotcurator/.env");
    path
}

/// Everything the core needs to talk to Spotify.
#[derive(Clone, PartialEq)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub token_url: String,
    pub api_url: String,
    pub market: String,
    pub timeout: Duration,
}

impl Config {
    /// Creates a configuration for the public Spotify endpoints.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Config {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            market: DEFAULT_MARKET.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Reads the configuration from the process environment.
    ///
    /// `SPOTIFY_CLIENT_ID` and `SPOTIFY_CLIENT_SECRET` are required and must not
    /// be empty. Endpoint URLs, market and timeout fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_vars<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| get(name).filter(|value| !value.trim().is_empty());

        let client_id = non_empty(CLIENT_ID).ok_or(ConfigError::Missing(CLIENT_ID))?;
        let client_secret = non_empty(CLIENT_SECRET).ok_or(ConfigError::Missing(CLIENT_SECRET))?;

        let mut config = Config::new(client_id, client_secret);
        if let Some(url) = non_empty(TOKEN_URL) {
            config = config.with_token_url(url);
        }
        if let Some(url) = non_empty(API_URL) {
            config = config.with_api_url(url);
        }
        if let Some(market) = non_empty(MARKET) {
            config = config.with_market(market);
        }
        if let Some(raw) = non_empty(TIMEOUT_SECS) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::Invalid {
                    name: TIMEOUT_SECS,
                    value: raw.clone(),
                })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    pub fn with_token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = url.into();
        self
    }

    /// Sets the Web API base URL. A trailing slash is dropped.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_market(mut self, market: impl Into<String>) -> Self {
        self.market = market.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("token_url", &self.token_url)
            .field("api_url", &self.api_url)
            .field("market", &self.market)
            .field("timeout", &self.timeout)
            .finish()
    }
}
