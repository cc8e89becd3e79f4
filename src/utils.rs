use rand::{Rng, distr::Alphanumeric};
use thiserror::Error;

use crate::types::{Device, PlaybackAction, PlayerCommand, SearchType};

pub const STATE_LENGTH: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no devices found")]
pub struct NoDevicesFound;

/// Treats empty or whitespace-only strings the same as missing values.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Random value for the OAuth `state` parameter.
pub fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(STATE_LENGTH)
        .map(char::from)
        .collect()
}

/// Picks the device a playback command should target.
///
/// The first active device wins, then the first unrestricted one, then
/// whatever comes first. Only an empty list fails.
pub fn select_device(devices: &[Device]) -> Result<&Device, NoDevicesFound> {
    devices
        .iter()
        .find(|d| d.is_active)
        .or_else(|| devices.iter().find(|d| !d.is_restricted))
        .or_else(|| devices.first())
        .ok_or(NoDevicesFound)
}

pub fn build_search_query(query: &str, search_type: SearchType) -> String {
    match search_type {
        SearchType::Artist => format!("artist:{query}"),
        SearchType::Title => format!("track:{query}"),
        SearchType::All => query.to_string(),
    }
}

pub fn track_uri(track_id: &str) -> String {
    format!("spotify:track:{track_id}")
}

/// Maps a playback action onto the player command it issues.
///
/// `play` needs a track; the other actions ignore it.
pub fn build_player_command(
    action: PlaybackAction,
    track_id: Option<&str>,
) -> Result<PlayerCommand, String> {
    match action {
        PlaybackAction::Play => match track_id.filter(|id| !id.trim().is_empty()) {
            Some(id) => Ok(PlayerCommand::Play {
                uris: vec![track_uri(id)],
            }),
            None => Err("trackId is required to play".to_string()),
        },
        PlaybackAction::Pause => Ok(PlayerCommand::Pause),
        PlaybackAction::Next => Ok(PlayerCommand::Next),
        PlaybackAction::Previous => Ok(PlayerCommand::Previous),
    }
}
