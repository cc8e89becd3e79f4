use reqwest::Url;

use super::{SpotifyClient, SpotifyError, check};
use crate::types::TokenResponse;

/// Permissions requested from the user when building the authorization URL.
pub const SCOPES: [&str; 7] = [
    "user-read-playback-state",
    "user-modify-playback-state",
    "user-read-currently-playing",
    "streaming",
    "app-remote-control",
    "user-read-email",
    "user-read-private",
];

impl SpotifyClient {
    /// Builds the URL the browser is sent to for user authorization.
    ///
    /// # Arguments
    ///
    /// * `scopes` - Permissions to request, joined with spaces
    /// * `state` - Opaque value echoed back to the redirect URI
    pub fn authorize_url(&self, scopes: &[&str], state: &str) -> Result<String, SpotifyError> {
        let scope = scopes.join(" ");
        let url = Url::parse_with_params(
            &format!("{}/authorize", self.accounts_url),
            &[
                ("client_id", self.client_id.as_str()),
                ("response_type", "code"),
                ("redirect_uri", self.redirect_uri.as_str()),
                ("scope", scope.as_str()),
                ("state", state),
            ],
        )
        .map_err(|e| SpotifyError::InvalidUrl(e.to_string()))?;

        Ok(url.to_string())
    }

    /// Exchanges an authorization code for a user access/refresh token pair.
    pub async fn authorization_code_grant(&self, code: &str) -> Result<TokenResponse, SpotifyError> {
        self.request_token(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", self.redirect_uri.as_str()),
        ])
        .await
    }

    /// Trades a refresh token for a fresh access token.
    ///
    /// Spotify may or may not rotate the refresh token; callers only rely on
    /// the access token and its lifetime.
    pub async fn refresh_access_token(
        &self,
        refresh_token: &str,
    ) -> Result<TokenResponse, SpotifyError> {
        self.request_token(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ])
        .await
    }

    /// Obtains an application-level token with no user context.
    pub async fn client_credentials_grant(&self) -> Result<TokenResponse, SpotifyError> {
        self.request_token(&[("grant_type", "client_credentials")])
            .await
    }

    async fn request_token(&self, form: &[(&str, &str)]) -> Result<TokenResponse, SpotifyError> {
        let response = self
            .http
            .post(format!("{}/api/token", self.accounts_url))
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(form)
            .send()
            .await?;

        Ok(check(response).await?.json::<TokenResponse>().await?)
    }
}
