use std::sync::Arc;

use axum::{
    Extension, Json,
    body::Bytes,
    http::Method,
    response::{IntoResponse, Response},
};

use super::{ApiError, provider};
use crate::{
    config::Config,
    info,
    spotify::SpotifyClient,
    success,
    types::{PlaybackAction, PlaybackRequest, SuccessPayload},
    utils::{self, non_empty},
};

const PLAYBACK_FAILED: &str = "Playback failed";
const MISSING_PARAMETERS: &str = "Missing required parameters";

pub async fn playback(
    method: Method,
    Extension(config): Extension<Arc<Config>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    if method != Method::POST {
        return Err(ApiError::MethodNotAllowed);
    }

    let request: PlaybackRequest = serde_json::from_slice(&body)
        .map_err(|e| ApiError::BadRequest(format!("Invalid JSON body: {e}")))?;

    info!(
        "Playback request: action={:?} track={:?} has_access_token={}",
        request.action,
        request.track_id,
        request.access_token.is_some()
    );

    let (Some(action), Some(access_token)) =
        (non_empty(request.action), non_empty(request.access_token))
    else {
        return Err(ApiError::BadRequest(MISSING_PARAMETERS.to_string()));
    };

    let action: PlaybackAction = action
        .parse()
        .map_err(|_| ApiError::InvalidAction(action.clone()))?;
    let command = utils::build_player_command(action, request.track_id.as_deref())
        .map_err(|_| ApiError::BadRequest(MISSING_PARAMETERS.to_string()))?;

    let client = SpotifyClient::new(&config).with_access_token(access_token);

    let devices = client
        .my_devices()
        .await
        .map_err(provider(PLAYBACK_FAILED))?;
    info!("Found {} device(s)", devices.len());

    let device = utils::select_device(&devices)?;
    info!(
        "Using device '{}' ({})",
        device.name,
        device.id.as_deref().unwrap_or("no id")
    );

    client
        .send_command(device.id.as_deref(), &command)
        .await
        .map_err(provider(PLAYBACK_FAILED))?;

    success!("Sent {} to '{}'", action, device.name);
    Ok(Json(SuccessPayload { success: true }).into_response())
}
