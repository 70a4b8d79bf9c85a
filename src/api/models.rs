use serde::{Deserialize, Serialize};

use crate::data_models::SearchResult;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub results_count: usize,
    pub results: Vec<SearchResult>,
}

#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}
