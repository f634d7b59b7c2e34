//! Error types for the credential exchange, catalog requests and the lookup
//! orchestration.
//!
//! Each layer has its own enum so the shell can tell "could not authenticate"
//! apart from "artist not found" and "catalog lookup failed".

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of the client-credentials token exchange.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Spotify client id or secret is empty")]
    MissingCredentials,

    #[error("Token request timed out")]
    Timeout,

    #[error("Token request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Token endpoint responded with {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Token response is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Token response has no access_token")]
    MissingAccessToken,
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AuthError::Timeout
        } else {
            AuthError::Transport(err)
        }
    }
}

/// Failure of an authenticated catalog request.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog request timed out")]
    Timeout,

    #[error("Catalog request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Catalog responded with {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Catalog response is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CatalogError::Timeout
        } else {
            CatalogError::Transport(err)
        }
    }
}

/// Outcome of a whole artist lookup that is not a success.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Artist name must not be empty")]
    EmptyName,

    #[error("Could not connect to Spotify: {0}")]
    Auth(#[from] AuthError),

    #[error("Artist '{0}' not found")]
    NotFound(String),

    #[error("Catalog lookup failed: {0}")]
    Catalog(#[from] CatalogError),
}

/// Invalid or missing runtime configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value '{value}'")]
    Invalid { name: &'static str, value: String },

    #[error("Cannot load environment file: {0}")]
    EnvFile(String),
}
