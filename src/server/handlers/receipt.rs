//! Receipt rendering handlers.
//!
//! Each request is one "page load": the raw query string is decoded once,
//! the clock is read once, and the page is rendered synchronously.

use axum::{
    extract::{RawQuery, State},
    http::header,
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

use crate::{page, query, view::Layout};

use super::super::state::AppState;

/// Handle GET / and GET /receipt/label - fixed 80mm x 120mm label.
pub async fn label(State(state): State<Arc<AppState>>, RawQuery(raw): RawQuery) -> impl IntoResponse {
    render(&state, Layout::Label, raw)
}

/// Handle GET /receipt/roll - variable-length 80mm roll.
pub async fn roll(State(state): State<Arc<AppState>>, RawQuery(raw): RawQuery) -> impl IntoResponse {
    render(&state, Layout::Roll, raw)
}

fn render(state: &AppState, layout: Layout, raw: Option<String>) -> Response {
    let now = state.clock.now();
    let record = query::decode(raw.as_deref().unwrap_or_default(), now);

    tracing::info!(
        receipt_id = %record.receipt_id,
        paper = layout.paper().name,
        components = record.components.len(),
        "rendering receipt"
    );

    let html = page::render_page(&record, layout, &state.page_options());

    // Every render carries a fresh timestamp
    ([(header::CACHE_CONTROL, "no-store")], Html(html)).into_response()
}
