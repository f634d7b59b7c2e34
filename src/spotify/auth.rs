use std::time::Duration;

use base64::{Engine, engine::general_purpose::STANDARD};
use log::debug;
use reqwest::{
    StatusCode,
    blocking::Client,
    header::{AUTHORIZATION, CONTENT_TYPE},
};

use crate::{config::Config, error::AuthError, types::TokenResponse};

/// Exchanges the application's client id and secret for a bearer token.
///
/// The provider holds the credentials it was built with and nothing else:
/// tokens are never cached, each [`CredentialProvider::get_token`] call is a
/// single request to the accounts service.
#[derive(Clone)]
pub struct CredentialProvider {
    client: Client,
    client_id: String,
    client_secret: String,
    token_url: String,
    timeout: Duration,
}

impl CredentialProvider {
    pub fn new(config: &Config) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: &Config, client: Client) -> Self {
        CredentialProvider {
            client,
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            token_url: config.token_url.clone(),
            timeout: config.timeout,
        }
    }

    /// Requests an access token with the client-credentials grant.
    ///
    /// # Errors
    ///
    /// - [`AuthError::MissingCredentials`] if the id or secret is empty; no
    ///   request is sent in that case
    /// - [`AuthError::Timeout`] / [`AuthError::Transport`] for network failures
    /// - [`AuthError::Status`] for any response other than 200
    /// - [`AuthError::Malformed`] if the body is not JSON
    /// - [`AuthError::MissingAccessToken`] if `access_token` is absent or empty
    pub fn get_token(&self) -> Result<String, AuthError> {
        if self.client_id.is_empty() || self.client_secret.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        debug!("POST {}", self.token_url);
        let response = self
            .client
            .post(&self.token_url)
            .header(
                AUTHORIZATION,
                format!(
                    "Basic {}",
                    basic_credentials(&self.client_id, &self.client_secret)
                ),
            )
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body("grant_type=client_credentials")
            .timeout(self.timeout)
            .send()?;

        let status = response.status();
        let body = response.text()?;
        if status != StatusCode::OK {
            return Err(AuthError::Status { status, body });
        }

        let token: TokenResponse = serde_json::from_str(&body)?;
        token
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::MissingAccessToken)
    }
}

impl std::fmt::Debug for CredentialProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialProvider")
            .field("client_id", &self.client_id)
            .field("token_url", &self.token_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Base64 encoding of `"{client_id}:{client_secret}"` for the Basic header.
pub fn basic_credentials(client_id: &str, client_secret: &str) -> String {
    STANDARD.encode(format!("{}:{}", client_id, client_secret))
}
