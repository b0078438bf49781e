use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Response};
use serde::Serialize;

use crate::core::{app_state::AppState, http::response_envelope::ApiResponse};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub products: usize,
}

pub async fn health_route(State(state): State<Arc<AppState>>) -> Response {
    ApiResponse::ok(HealthResponse {
        status: "ok",
        products: state.catalog.len(),
    })
    .with_status(StatusCode::OK)
}
