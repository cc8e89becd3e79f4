use std::{net::SocketAddr, str::FromStr, sync::Arc};

use axum::{
    Extension, Router,
    http::{Method, header},
    routing::{any, get},
};
use tower_http::cors::{Any, CorsLayer};

use crate::{Res, api, config::Config, info};

/// Builds the application router.
///
/// The three functions are mounted twice: under `/api` and under
/// `/.netlify/functions` so existing browser clients keep working.
pub fn router(config: Config) -> Router {
    let functions = Router::new()
        .route(
            "/auth",
            any(api::auth).layer(cors(&[Method::GET, Method::POST, Method::OPTIONS])),
        )
        .route("/search", any(api::search).layer(cors(&[Method::GET])))
        .route("/playback", any(api::playback).layer(cors(&[Method::POST])));

    Router::new()
        .route("/health", get(api::health))
        .nest("/api", functions.clone())
        .nest("/.netlify/functions", functions)
        .layer(Extension(Arc::new(config)))
}

fn cors(methods: &[Method]) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([header::CONTENT_TYPE])
        .allow_methods(methods.to_vec())
}

pub async fn start_api_server(config: Config, addr: &str) -> Res<()> {
    let addr = SocketAddr::from_str(addr)?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Listening on http://{}", addr);

    axum::serve(listener, router(config))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    info!("Server stopped");
    Ok(())
}
