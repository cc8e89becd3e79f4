use reqwest::Method;
use serde_json::Value;

use super::{SpotifyClient, SpotifyError, check};

pub const SEARCH_LIMIT: u32 = 10;

impl SpotifyClient {
    /// Searches the catalog for tracks.
    ///
    /// The response body is returned untouched so the browser sees exactly
    /// what Spotify sent.
    pub async fn search_tracks(&self, query: &str, limit: u32) -> Result<Value, SpotifyError> {
        let limit = limit.to_string();
        let response = self
            .api(Method::GET, "/search")?
            .query(&[
                ("q", query),
                ("type", "track"),
                ("limit", limit.as_str()),
                ("market", self.market.as_str()),
            ])
            .send()
            .await?;

        Ok(check(response).await?.json::<Value>().await?)
    }
}
