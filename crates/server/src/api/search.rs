//! Search API handlers.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use titlesearch_core::{CatalogState, QueryType, ResultTable, SearchOutcome};

use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    /// Selected query type identifier; absent when nothing is selected.
    #[serde(default)]
    pub query_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    #[serde(flatten)]
    pub outcome: SearchOutcome,
    /// Result view after this trigger. Unchanged unless the outcome is
    /// `rendered`.
    pub results: ResultTable,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub state: CatalogState,
    pub status: String,
    pub entries: usize,
    pub query_types: Vec<QueryType>,
    pub minimum_query_length: usize,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/v1/search
///
/// Run one search trigger with the current query text and query type.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SearchRequest>,
) -> Json<SearchResponse> {
    let mut session = state.session().write().await;
    let outcome = session.search(&body.query, body.query_type.as_deref());

    Json(SearchResponse {
        outcome,
        results: session.sink().clone(),
    })
}

/// GET /api/v1/results
///
/// Current result view.
pub async fn get_results(State(state): State<Arc<AppState>>) -> Json<ResultTable> {
    Json(state.session().read().await.sink().clone())
}

/// GET /api/v1/status
///
/// Catalog readiness and the query types on offer.
pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let session = state.session().read().await;

    Json(StatusResponse {
        state: session.state(),
        status: session.sink().status.clone(),
        entries: session.index().map_or(0, |index| index.len()),
        query_types: session.available_query_types().to_vec(),
        minimum_query_length: session.options().minimum_query_length,
    })
}
