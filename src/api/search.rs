use std::{collections::HashMap, sync::Arc};

use axum::{
    Extension, Json,
    extract::Query,
    http::Method,
    response::{IntoResponse, Response},
};

use super::{ApiError, provider};
use crate::{
    config::Config,
    info,
    spotify::{SpotifyClient, search::SEARCH_LIMIT},
    types::{SearchParams, SearchType},
    utils::{self, non_empty},
};

const SEARCH_FAILED: &str = "Failed to search tracks";

pub async fn search(
    method: Method,
    Query(query): Query<HashMap<String, String>>,
    Extension(config): Extension<Arc<Config>>,
) -> Result<Response, ApiError> {
    if method != Method::GET {
        return Err(ApiError::MethodNotAllowed);
    }

    let params = SearchParams::from(query);
    let query = non_empty(params.query)
        .ok_or_else(|| ApiError::BadRequest("Query parameter is required".to_string()))?;
    let search_type = SearchType::from_param(params.search_type.as_deref());
    let query = utils::build_search_query(&query, search_type);

    info!("Searching tracks for '{}'", query);

    let mut client = SpotifyClient::new(&config);
    let token = client
        .client_credentials_grant()
        .await
        .map_err(provider(SEARCH_FAILED))?;
    client.set_access_token(token.access_token);

    let results = client
        .search_tracks(&query, SEARCH_LIMIT)
        .await
        .map_err(provider(SEARCH_FAILED))?;

    Ok(Json(results).into_response())
}
