use super::engine::{self, DEFAULT_TOP_K};
use super::types::SearchResponse;
use crate::index::store::DocumentStore;
use axum::extract::Extension;
use axum::{Form, Json};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

/// `POST /search/` with a form-encoded `query` field.
///
/// Always answers 200: an empty index or a query with no matches yields an
/// empty `results` array, which the frontend turns into its own message.
pub async fn handle_search(
    Extension(store): Extension<Arc<DocumentStore>>,
    Form(req): Form<SearchRequest>,
) -> Json<SearchResponse> {
    let results = engine::search(&req.query, &store, DEFAULT_TOP_K);
    tracing::debug!(
        "Search {:?} matched {} of {} chunks",
        req.query,
        results.len(),
        store.chunk_count()
    );
    Json(SearchResponse { results })
}
