//! # Spotify Integration Module
//!
//! Request-scoped client for the parts of the Spotify accounts service and
//! Web API the proxy needs. A [`SpotifyClient`] is built from the shared
//! [`Config`] at the start of every request and dropped at the end of it;
//! nothing about a client outlives the request that created it.
//!
//! ## Submodules
//!
//! - [`auth`] - authorization URL and token grants (authorization code,
//!   refresh token, client credentials)
//! - [`search`] - track search
//! - [`player`] - device listing and player commands
//!
//! ## API Coverage
//!
//! - `GET /authorize` (URL construction only)
//! - `POST /api/token`
//! - `GET /search`
//! - `GET /me/player/devices`
//! - `PUT /me/player/play`, `PUT /me/player/pause`
//! - `POST /me/player/next`, `POST /me/player/previous`
//!
//! ## Error Types
//!
//! Every call returns [`SpotifyError`]. Transport and decoding failures come
//! through as [`SpotifyError::Http`]; non-2xx answers from Spotify become
//! [`SpotifyError::Api`] carrying the message Spotify sent back.

pub mod auth;
pub mod player;
pub mod search;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use thiserror::Error;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum SpotifyError {
    #[error("request to Spotify failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Spotify responded with {status}: {message}")]
    Api { status: StatusCode, message: String },
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("no access token set")]
    MissingAccessToken,
}

pub struct SpotifyClient {
    http: Client,
    accounts_url: String,
    api_url: String,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    market: String,
    access_token: Option<String>,
}

impl SpotifyClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::new(),
            accounts_url: config.accounts_url.trim_end_matches('/').to_string(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            redirect_uri: config.redirect_uri.clone(),
            market: config.market.clone(),
            access_token: None,
        }
    }

    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        self.set_access_token(access_token);
        self
    }

    pub fn set_access_token(&mut self, access_token: impl Into<String>) {
        self.access_token = Some(access_token.into());
    }

    /// Starts a bearer-authenticated request against the Web API.
    fn api(&self, method: Method, path: &str) -> Result<RequestBuilder, SpotifyError> {
        let token = self
            .access_token
            .as_deref()
            .ok_or(SpotifyError::MissingAccessToken)?;

        Ok(self
            .http
            .request(method, format!("{}{}", self.api_url, path))
            .bearer_auth(token))
    }
}

/// Passes successful responses through and turns everything else into
/// [`SpotifyError::Api`].
async fn check(response: Response) -> Result<Response, SpotifyError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = error_message(&body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    });

    Err(SpotifyError::Api { status, message })
}

/// Extracts the human readable message from a Spotify error body.
///
/// The Web API answers with `{"error": {"status", "message"}}` while the
/// accounts service uses `{"error", "error_description"}`.
pub fn error_message(body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;

    match &json["error"] {
        Value::Object(error) => error
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string),
        Value::String(code) => Some(match json["error_description"].as_str() {
            Some(description) => format!("{code}: {description}"),
            None => code.clone(),
        }),
        _ => None,
    }
}
