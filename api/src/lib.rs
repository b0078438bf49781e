//! HTTP surface of the storefront listings.
//!
//! Routes:
//! - `GET  /health`
//! - `GET  /categories`
//! - `GET  /categories/{slug}?<filters>`
//! - `POST /categories/{slug}/navigate?<filters>` (303 to the next listing URL)

pub mod core;
pub mod error_handler;
pub mod middleware_layer;
pub mod routes;

use std::sync::Arc;

use axum::{
    Router,
    http::Uri,
    middleware,
    routing::{get, post},
};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    middleware_layer::request_id::request_id,
    routes::{
        categories_route::categories_route, health_route::health_route,
        listing::listing_route::listing_route, navigate::navigate_route::navigate_route,
    },
};

/// Router with every route, the request-id middleware and HTTP tracing.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_route))
        .route("/categories", get(categories_route))
        .route("/categories/{slug}", get(listing_route))
        .route("/categories/{slug}/navigate", post(navigate_route))
        .fallback(route_not_found)
        .layer(middleware::from_fn(request_id))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn route_not_found(uri: Uri) -> AppError {
    AppError::RouteNotFound(uri.path().to_string())
}

/// Load config from the environment, bind and serve until Ctrl+C.
pub async fn start() -> AppResult<()> {
    let state = AppState::from_env()?;
    let address = state.config.address.clone();
    info!(
        %address,
        products = state.catalog.len(),
        "starting storefront api"
    );

    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| AppError::Bind {
            address: address.clone(),
            source,
        })?;

    axum::serve(listener, build_router(Arc::new(state)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    info!("storefront api stopped");
    Ok(())
}

/// Resolves when Ctrl+C is pressed.
async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
