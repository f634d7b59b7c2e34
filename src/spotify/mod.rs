//! # Spotify Integration Module
//!
//! Blocking clients for the two Spotify services spotcurator talks to:
//!
//! - [`auth`] - the accounts service, where a client id/secret pair is exchanged
//!   for a bearer token (OAuth 2.0 client-credentials grant). No user is
//!   involved and no token is cached; every lookup starts with a fresh one.
//! - [`artists`] and [`tracks`] - read-only Web API requests made through
//!   [`CatalogClient`]: artist search, an artist's top tracks and the audio
//!   features of a set of tracks.
//!
//! ## Error Policy
//!
//! Nothing here retries. Token and search failures are returned to the caller
//! as [`crate::error::AuthError`] and [`crate::error::CatalogError`]. Top tracks
//! and audio features have a degrading variant that logs the failure and
//! returns an empty result, so a lookup that found the artist always succeeds.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - client-credentials token
//! - `GET /search?type=artist&limit=1` - first artist matching a name
//! - `GET /artists/{id}/top-tracks?market=..` - an artist's top tracks
//! - `GET /audio-features?ids=..` - audio features of several tracks
//!
//! All calls use `reqwest::blocking`. The binary moves them off its async
//! runtime with `spawn_blocking`.

use std::time::Duration;

use log::debug;
use reqwest::{
    StatusCode,
    blocking::{Client, RequestBuilder},
};
use serde::de::DeserializeOwned;

use crate::{config::Config, error::CatalogError};

pub mod artists;
pub mod auth;
pub mod tracks;

pub use auth::CredentialProvider;

/// Authenticated reader for the Spotify Web API.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    api_url: String,
    market: String,
    timeout: Duration,
}

impl CatalogClient {
    pub fn new(config: &Config) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Creates a catalog client that shares an existing HTTP client.
    pub fn with_client(config: &Config, client: Client) -> Self {
        CatalogClient {
            client,
            api_url: config.api_url.clone(),
            market: config.market.clone(),
            timeout: config.timeout,
        }
    }

    pub fn market(&self) -> &str {
        &self.market
    }

    fn get(&self, token: &str, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.api_url, path);
        debug!("GET {}", url);
        self.client
            .get(url)
            .bearer_auth(token)
            .timeout(self.timeout)
    }
}

/// Sends a request and decodes a 200 response body as JSON.
///
/// Any other status is returned as [`CatalogError::Status`] with the body text.
fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, CatalogError> {
    let response = request.send()?;
    let status = response.status();
    let body = response.text()?;

    if status != StatusCode::OK {
        return Err(CatalogError::Status { status, body });
    }

    Ok(serde_json::from_str(&body)?)
}
