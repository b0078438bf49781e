//! GET /categories/{slug}: filtered, sorted listing for one category,
//! collection or `all-products`.

use std::sync::Arc;

use axum::{
    extract::{Path, RawQuery, State},
    http::{HeaderMap, StatusCode},
    response::Response,
};
use catalog::ListingScope;
use query_view::{FilterState, QueryParams, view};
use tracing::{debug, info, instrument};

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    error_handler::AppResult,
    middleware_layer::request_id::incoming_request_id,
    routes::listing::listing_response::ListingResponse,
};

/// Handler: GET /categories/{slug}
///
/// # Example
/// ```bash
/// curl 'http://127.0.0.1:8080/categories/bracelets?min=0&max=20000&color=pink&sort=price-desc'
/// ```
#[instrument(name = "listing_route", skip(state, headers, raw_query), fields(slug = %slug))]
pub async fn listing_route(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    RawQuery(raw_query): RawQuery,
    headers: HeaderMap,
) -> AppResult<Response> {
    if let Some(id) = incoming_request_id(&headers) {
        debug!(%id, "request id attached");
    }

    let scope = ListingScope::resolve(&slug)?;
    let query = QueryParams::parse(raw_query.as_deref().unwrap_or_default());
    let filters = FilterState::decode(&query);

    let base = state.catalog.select(&scope);
    let products = view(base, &filters);

    info!(
        scope = scope.slug(),
        count = products.len(),
        sort = %filters.sort,
        "listing served"
    );

    let body = ListingResponse::build(scope, &query, filters, &products, state.bounds());
    Ok(ApiResponse::ok(body).with_status(StatusCode::OK))
}
