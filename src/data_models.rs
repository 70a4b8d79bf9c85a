use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

static SEARCH_RESULTS: OnceLock<Vec<SearchResult>> = OnceLock::new();

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub id: u32,
    pub title: String,
    pub snippet: String,
    pub url: String,
}

impl SearchResult {
    pub fn new(id: u32, title: &str, snippet: &str, url: &str) -> SearchResult {
        SearchResult {
            id,
            title: title.to_string(),
            snippet: snippet.to_string(),
            url: url.to_string(),
        }
    }
}

/// The fixed result set served by every search call.
/// Initialized on first access and never mutated afterwards, so handlers
/// share it read-only without locking.
pub fn fixed_results() -> &'static [SearchResult] {
    SEARCH_RESULTS.get_or_init(|| {
        vec![
            SearchResult::new(
                1,
                "Result One",
                "This is the first search result.",
                "https://example.com/one",
            ),
            SearchResult::new(
                2,
                "Result Two",
                "This is the second search result.",
                "https://example.com/two",
            ),
            SearchResult::new(
                3,
                "Result Three",
                "This is the third search result.",
                "https://example.com/three",
            ),
        ]
    })
}
