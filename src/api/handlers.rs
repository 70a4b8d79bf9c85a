use axum::{Json, extract::Query};

use crate::data_models::fixed_results;

use super::models::{Message, SearchParams, SearchResponse};

/// Liveness/identity probe. Static body, no state.
pub async fn root_handler() -> Json<Message> {
    Json(Message {
        message: "Welcome to the Simple FastAPI Search API".to_string(),
    })
}

/// A missing `q` is rejected by the `Query` extractor with a client error
/// before this body runs; any present value, including empty, is accepted.
pub async fn search_handler(Query(params): Query<SearchParams>) -> Json<SearchResponse> {
    // `q` is echoed back verbatim. It never filters or ranks the fixed set.
    let results = fixed_results().to_vec();

    Json(SearchResponse {
        query: params.q,
        results_count: results.len(),
        results,
    })
}
