//! Configuration management for the Spotify proxy.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Configuration is read once at startup into a
//! [`Config`] value which is then shared read-only with every handler.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the current working directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf};

use thiserror::Error;

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";
pub const DEFAULT_ACCOUNTS_URL: &str = "https://accounts.spotify.com";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_MARKET: &str = "US";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
}

/// Loads environment variables from `.env` files.
///
/// Reads `.env` from the working directory first and then
/// `playdeck/.env` from the platform-specific local data directory:
/// - Linux: `~/.local/share/playdeck/.env`
/// - macOS: `~/Library/Application Support/playdeck/.env`
/// - Windows: `%LOCALAPPDATA%/playdeck/.env`
///
/// Both files are optional and neither overrides variables that are already
/// set in the process environment.
pub fn load_env() {
    let _ = dotenv::dotenv();

    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("playdeck/.env");
    if path.is_file() {
        let _ = dotenv::from_path(path);
    }
}

/// Immutable runtime configuration shared by all handlers.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub accounts_url: String,
    pub api_url: String,
    pub market: String,
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] naming the first required variable
    /// that is not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            client_id: spotify_client_id()?,
            client_secret: spotify_client_secret()?,
            redirect_uri: spotify_redirect_uri()?,
            accounts_url: spotify_accounts_url(),
            api_url: spotify_api_url(),
            market: spotify_market(),
        })
    }
}

/// Returns the address the HTTP server binds to.
///
/// Reads `SERVER_ADDRESS`, falling back to [`DEFAULT_SERVER_ADDRESS`].
pub fn server_addr() -> String {
    optional("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)
}

/// Returns the Spotify application client ID from `SPOTIFY_CLIENT_ID`.
pub fn spotify_client_id() -> Result<String, ConfigError> {
    required("SPOTIFY_CLIENT_ID")
}

/// Returns the Spotify application client secret from `SPOTIFY_CLIENT_SECRET`.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or responses.
pub fn spotify_client_secret() -> Result<String, ConfigError> {
    required("SPOTIFY_CLIENT_SECRET")
}

/// Returns the OAuth redirect URI from `SPOTIFY_REDIRECT_URI`.
///
/// This must match the redirect URI registered in the Spotify application
/// settings.
pub fn spotify_redirect_uri() -> Result<String, ConfigError> {
    required("SPOTIFY_REDIRECT_URI")
}

/// Returns the base URL of the Spotify accounts service.
pub fn spotify_accounts_url() -> String {
    optional("SPOTIFY_ACCOUNTS_URL", DEFAULT_ACCOUNTS_URL)
}

/// Returns the base URL of the Spotify Web API.
pub fn spotify_api_url() -> String {
    optional("SPOTIFY_API_URL", DEFAULT_API_URL)
}

/// Returns the market used to scope track searches.
pub fn spotify_market() -> String {
    optional("SPOTIFY_MARKET", DEFAULT_MARKET)
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}

fn optional(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
