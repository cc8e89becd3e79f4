use std::{collections::HashMap, sync::Arc};

use axum::{
    Extension, Json,
    extract::Query,
    response::{IntoResponse, Response},
};

use super::{ApiError, provider};
use crate::{
    config::Config,
    info,
    spotify::{SpotifyClient, auth::SCOPES},
    types::{AuthParams, AuthRequest, AuthResponse, AuthorizeUrlPayload, TokenPayload},
    utils,
};

const AUTH_FAILED: &str = "Authorization failed";

pub async fn auth(
    Query(query): Query<HashMap<String, String>>,
    Extension(config): Extension<Arc<Config>>,
) -> Result<Response, ApiError> {
    let client = SpotifyClient::new(&config);

    let response = match AuthRequest::from(AuthParams::from(query)) {
        AuthRequest::Refresh { refresh_token } => {
            info!("Refreshing access token");
            let token = client
                .refresh_access_token(&refresh_token)
                .await
                .map_err(provider(AUTH_FAILED))?;

            AuthResponse::Token(TokenPayload {
                access_token: token.access_token,
                refresh_token: None,
                expires_in: token.expires_in,
            })
        }
        AuthRequest::CodeExchange { code } => {
            info!("Exchanging authorization code");
            let token = client
                .authorization_code_grant(&code)
                .await
                .map_err(provider(AUTH_FAILED))?;

            AuthResponse::Token(TokenPayload {
                access_token: token.access_token,
                refresh_token: token.refresh_token,
                expires_in: token.expires_in,
            })
        }
        AuthRequest::AuthUrl => {
            let state = utils::generate_state();
            let authorize_url = client
                .authorize_url(&SCOPES, &state)
                .map_err(provider(AUTH_FAILED))?;

            AuthResponse::AuthorizeUrl(AuthorizeUrlPayload { authorize_url })
        }
    };

    Ok(Json(response).into_response())
}
