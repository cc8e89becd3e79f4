use std::{collections::HashMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::utils::non_empty;

/// A playback device as reported by `GET /me/player/devices`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Device {
    pub id: Option<String>,
    pub name: String,
    pub is_active: bool,
    pub is_restricted: bool,
    #[serde(rename = "type")]
    pub device_type: String,
    pub volume_percent: Option<u8>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DevicesResponse {
    #[serde(default)]
    pub devices: Vec<Device>,
}

/// Token payload returned by the accounts service for every grant type.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    pub expires_in: u64,
    pub refresh_token: Option<String>,
    pub scope: Option<String>,
}

/// Query parameters accepted by the auth endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthParams {
    pub code: Option<String>,
    pub refresh_token: Option<String>,
}

impl From<HashMap<String, String>> for AuthParams {
    fn from(mut query: HashMap<String, String>) -> Self {
        Self {
            code: query.remove("code"),
            refresh_token: query.remove("refresh_token"),
        }
    }
}

/// The three shapes an auth request can take.
///
/// A refresh token wins over an authorization code; with neither present the
/// caller gets an authorization URL to start the flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRequest {
    Refresh { refresh_token: String },
    CodeExchange { code: String },
    AuthUrl,
}

impl From<AuthParams> for AuthRequest {
    fn from(params: AuthParams) -> Self {
        if let Some(refresh_token) = non_empty(params.refresh_token) {
            AuthRequest::Refresh { refresh_token }
        } else if let Some(code) = non_empty(params.code) {
            AuthRequest::CodeExchange { code }
        } else {
            AuthRequest::AuthUrl
        }
    }
}

/// Token body sent back to the browser after a successful exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPayload {
    pub access_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    pub expires_in: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizeUrlPayload {
    pub authorize_url: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AuthResponse {
    Token(TokenPayload),
    AuthorizeUrl(AuthorizeUrlPayload),
}

/// Query parameters accepted by the search endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
    #[serde(rename = "type")]
    pub search_type: Option<String>,
}

impl From<HashMap<String, String>> for SearchParams {
    fn from(mut query: HashMap<String, String>) -> Self {
        Self {
            query: query.remove("query"),
            search_type: query.remove("type"),
        }
    }
}

/// Which field a search query is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchType {
    #[default]
    All,
    Artist,
    Title,
}

impl SearchType {
    /// Reads the `type` parameter. Unknown or missing values search everything.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("artist") => SearchType::Artist,
            Some("title") => SearchType::Title,
            _ => SearchType::All,
        }
    }
}

/// JSON body accepted by the playback endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackRequest {
    pub action: Option<String>,
    pub track_id: Option<String>,
    pub access_token: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackAction {
    Play,
    Pause,
    Next,
    Previous,
}

impl PlaybackAction {
    pub const ALL: [PlaybackAction; 4] = [
        PlaybackAction::Play,
        PlaybackAction::Pause,
        PlaybackAction::Next,
        PlaybackAction::Previous,
    ];
}

impl fmt::Display for PlaybackAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlaybackAction::Play => "play",
            PlaybackAction::Pause => "pause",
            PlaybackAction::Next => "next",
            PlaybackAction::Previous => "previous",
        };
        f.write_str(s)
    }
}

impl FromStr for PlaybackAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "play" => Ok(PlaybackAction::Play),
            "pause" => Ok(PlaybackAction::Pause),
            "next" => Ok(PlaybackAction::Next),
            "previous" => Ok(PlaybackAction::Previous),
            other => Err(format!("invalid action '{other}'")),
        }
    }
}

/// A player command ready to be sent to a device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerCommand {
    Play { uris: Vec<String> },
    Pause,
    Next,
    Previous,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessPayload {
    pub success: bool,
}
