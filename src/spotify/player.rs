use reqwest::Method;
use serde_json::json;

use super::{SpotifyClient, SpotifyError, check};
use crate::types::{Device, DevicesResponse, PlayerCommand};

impl SpotifyClient {
    /// Lists the devices currently available to the user, in Spotify's order.
    pub async fn my_devices(&self) -> Result<Vec<Device>, SpotifyError> {
        let response = self.api(Method::GET, "/me/player/devices")?.send().await?;
        let payload = check(response).await?.json::<DevicesResponse>().await?;
        Ok(payload.devices)
    }

    /// Sends a player command, targeting `device_id` when one is given.
    pub async fn send_command(
        &self,
        device_id: Option<&str>,
        command: &PlayerCommand,
    ) -> Result<(), SpotifyError> {
        let (method, path) = endpoint(command);
        let mut request = self.api(method, path)?;

        if let Some(device_id) = device_id {
            request = request.query(&[("device_id", device_id)]);
        }

        request = match command {
            PlayerCommand::Play { uris } => request.json(&json!({ "uris": uris })),
            // Spotify rejects body-less PUT/POST without a Content-Length
            _ => request.body(""),
        };

        check(request.send().await?).await?;
        Ok(())
    }
}

fn endpoint(command: &PlayerCommand) -> (Method, &'static str) {
    match command {
        PlayerCommand::Play { .. } => (Method::PUT, "/me/player/play"),
        PlayerCommand::Pause => (Method::PUT, "/me/player/pause"),
        PlayerCommand::Next => (Method::POST, "/me/player/next"),
        PlayerCommand::Previous => (Method::POST, "/me/player/previous"),
    }
}
