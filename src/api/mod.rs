//! # API Module
//!
//! HTTP handlers for the proxy. Each handler is stateless: it reads the
//! shared [`Config`](crate::config::Config) from an `Extension`, builds a
//! request-scoped [`SpotifyClient`](crate::spotify::SpotifyClient), does its
//! work and drops everything again.
//!
//! ## Endpoints
//!
//! - [`auth`] - authorization URL, code exchange and token refresh
//! - [`search`] - client-credentials track search
//! - [`playback`] - play, pause, next and previous on a selected device
//! - [`health`] - liveness and version information
//!
//! ## Errors
//!
//! Handlers return [`ApiError`], which logs itself and renders a JSON body
//! of the form `{"error": "..."}`. Failures coming from Spotify add a
//! `details` field with the provider's message.

mod auth;
mod health;
mod playback;
mod search;

pub use auth::auth;
pub use health::health;
pub use playback::playback;
pub use search::search;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::{spotify::SpotifyError, utils::NoDevicesFound, warning};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("{0}")]
    BadRequest(String),
    #[error("No active devices found. Please open Spotify on a device.")]
    NoDevicesFound,
    #[error("Invalid action")]
    InvalidAction(String),
    #[error("{context}")]
    Provider {
        context: &'static str,
        #[source]
        source: SpotifyError,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::BadRequest(_) | ApiError::NoDevicesFound | ApiError::InvalidAction(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Provider { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<NoDevicesFound> for ApiError {
    fn from(_: NoDevicesFound) -> Self {
        ApiError::NoDevicesFound
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::Provider { context, source } => {
                warning!("{}: {}", context, source);
                json!({ "error": context, "details": source.to_string() })
            }
            ApiError::InvalidAction(action) => {
                warning!("Invalid action '{}'", action);
                json!({ "error": self.to_string() })
            }
            _ => {
                warning!("{}: {}", status, self);
                json!({ "error": self.to_string() })
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Wraps a Spotify failure with the message shown to the browser.
fn provider(context: &'static str) -> impl FnOnce(SpotifyError) -> ApiError {
    move |source| ApiError::Provider { context, source }
}
