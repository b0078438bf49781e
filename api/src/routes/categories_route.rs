//! GET /categories: every listing slug the storefront serves.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Response};
use catalog::{ScopeKind, known_scopes};
use serde::Serialize;
use tracing::debug;

use crate::core::{app_state::AppState, http::response_envelope::ApiResponse};

#[derive(Debug, Serialize)]
pub struct CategoryEntry {
    pub slug: &'static str,
    pub kind: ScopeKind,
    pub heading: String,
    /// Listing location with no query (default filters).
    pub href: String,
    /// Products in this listing before any filter.
    pub total: usize,
}

pub async fn categories_route(State(state): State<Arc<AppState>>) -> Response {
    let entries: Vec<CategoryEntry> = known_scopes()
        .into_iter()
        .map(|scope| {
            let meta = scope.meta();
            CategoryEntry {
                slug: meta.slug,
                kind: meta.kind,
                heading: meta.heading,
                href: format!("/categories/{}", meta.slug),
                total: state.catalog.select(&scope).len(),
            }
        })
        .collect();

    debug!(count = entries.len(), "categories listed");
    ApiResponse::ok(entries).with_status(StatusCode::OK)
}
