//! HTTP gateway to the crawl search service.

use common::search_query::{QueryState, SearchEndpoint};
use common::search_result::{SearchResponse, SearchResult};
use dioxus::logger::tracing;
use thiserror::Error;

/// Base URL of the search service, overridable at compile time.
const API_BASE: &str = match option_env!("SEARCH_API_BASE") {
    Some(base) => base,
    None => "/api",
};

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("search request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("search service returned status {0}")]
    Status(u16),
}

#[derive(Debug, Clone)]
pub struct SearchApiClient {
    client: reqwest::Client,
    base: String,
}

impl Default for SearchApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchApiClient {
    pub fn new() -> Self {
        SearchApiClient {
            client: reqwest::Client::new(),
            base: API_BASE.to_string(),
        }
    }

    /// One idempotent GET per call: no retry, no caching. The endpoint is
    /// re-evaluated from the state on every dispatch; all terms go out as
    /// repeated `q` parameters alongside `from`.
    pub async fn execute(
        &self,
        state: &QueryState,
        endpoint: SearchEndpoint,
    ) -> Result<SearchResult, GatewayError> {
        let url = format!("{}/{}", self.base, endpoint.path());
        let mut pairs: Vec<(&str, String)> =
            state.terms.iter().map(|t| ("q", t.clone())).collect();
        pairs.push(("from", state.offset.to_string()));

        tracing::info!("dispatching query to {url}");
        let response = self.client.get(&url).query(&pairs).send().await?;
        if !response.status().is_success() {
            return Err(GatewayError::Status(response.status().as_u16()));
        }
        let body: SearchResponse = response.json().await?;
        Ok(SearchResult::from(body))
    }
}
