//! POST /categories/{slug}/navigate: apply one interaction to the current
//! query and redirect to the resulting listing.

use std::sync::Arc;

use axum::{
    extract::{Path, RawQuery, State},
    http::HeaderMap,
    response::Response,
};
use catalog::ListingScope;
use query_view::{
    Currency, MultiKey, QueryParams, SortKey, apply_max, apply_min, clear, href, set_currency,
    set_sort, toggle,
};
use tracing::{debug, info, instrument};

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    error_handler::AppResult,
    middleware_layer::{json_extractor::ValidJson, request_id::incoming_request_id},
    routes::navigate::navigate_request::{NavigateRequest, NavigateResponse},
};

/// Handler: POST /categories/{slug}/navigate?<current query>
///
/// Responds `303 See Other` with `Location` set to the new listing URL.
///
/// # Example
/// ```bash
/// curl -i -X POST 'http://127.0.0.1:8080/categories/rings/navigate?max=20000' \
///   -H 'content-type: application/json' \
///   -d '{"action":"set_min","value":25000}'
/// ```
#[instrument(name = "navigate_route", skip(state, headers, raw_query, action), fields(slug = %slug))]
pub async fn navigate_route(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    RawQuery(raw_query): RawQuery,
    headers: HeaderMap,
    ValidJson(action): ValidJson<NavigateRequest>,
) -> AppResult<Response> {
    if let Some(id) = incoming_request_id(&headers) {
        debug!(%id, "request id attached");
    }

    let scope = ListingScope::resolve(&slug)?;
    let current = QueryParams::parse(raw_query.as_deref().unwrap_or_default());
    debug!(?action, query = %current, "navigate: start");

    let next = apply(&current, action, &state)?;
    let location = href(&format!("/categories/{}", scope.slug()), &next);

    info!(%location, "navigate: redirect");

    Ok(ApiResponse::ok(NavigateResponse {
        location: location.clone(),
        query: next.to_query_string(),
    })
    .see_other(&location))
}

fn apply(current: &QueryParams, action: NavigateRequest, state: &AppState) -> AppResult<QueryParams> {
    let bounds = state.bounds();
    let next = match action {
        NavigateRequest::Toggle { key, value } => {
            let key: MultiKey = key.parse()?;
            toggle(current, key.as_str(), &value)
        }
        NavigateRequest::Clear { key } => {
            let key: MultiKey = key.parse()?;
            clear(current, key.as_str())
        }
        // Slider input snaps to the step grid before the bound is clamped.
        NavigateRequest::SetMin { value } => apply_min(current, snapped(value, state), bounds),
        NavigateRequest::SetMax { value } => apply_max(current, snapped(value, state), bounds),
        NavigateRequest::Sort { value } => set_sort(current, SortKey::parse(Some(&value))),
        NavigateRequest::Currency { value } => set_currency(current, Currency::parse(Some(&value))),
    };
    Ok(next)
}

fn snapped(value: i64, state: &AppState) -> i64 {
    i64::try_from(state.bounds().snap(value)).unwrap_or(i64::MAX)
}
