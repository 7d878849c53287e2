//! Search Form Handler
//!
//! One-shot submission flow for the search form: validate the query, POST it
//! form-encoded, and render the ranked results (or the failure) into the
//! results region.

use crate::page::{QueryInput, StatusRegion};
use crate::render;
use crate::types::SearchOutcome;

/// Handles submissions of the search form.
///
/// Same submission model as the upload handler: independent one-shot tasks,
/// no retry or sequencing, last resolved response owns the results region.
#[derive(Clone)]
pub struct SearchHandler {
    client: reqwest::Client,
    endpoint: String,
    input: QueryInput,
    results: StatusRegion,
}

impl SearchHandler {
    pub fn new(
        client: reqwest::Client,
        endpoint: impl Into<String>,
        input: QueryInput,
        results: StatusRegion,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            input,
            results,
        }
    }

    pub fn input(&self) -> &QueryInput {
        &self.input
    }

    pub fn results(&self) -> &StatusRegion {
        &self.results
    }

    /// Run one submission to completion.
    ///
    /// A whitespace-only query renders a validation error and never touches
    /// the network. The query is sent raw, untrimmed, under the `query`
    /// field. A 2xx with hits renders the highlighted list in server order;
    /// a 2xx without hits renders the no-results line; a non-2xx renders the
    /// server message; transport or parse failures render a generic line.
    pub async fn submit(&self) {
        let query = self.input.value();
        if query.trim().is_empty() {
            self.results
                .set(render::error("Please enter a search query"));
            return;
        }

        self.results.set(render::pending("Searching..."));

        match self.post_query(&query).await {
            Ok((ok, outcome)) => {
                if ok {
                    match outcome.results {
                        Some(hits) if !hits.is_empty() => {
                            self.results.set(render::search_results(&hits, &query));
                        }
                        _ => self.results.set(render::no_results()),
                    }
                } else {
                    let message = outcome
                        .message
                        .unwrap_or_else(|| "Search failed".to_string());
                    self.results.set(render::error(&message));
                }
            }
            Err(err) => {
                self.results
                    .set(render::error(&format!("Search failed: {}", err)));
            }
        }
    }

    async fn post_query(&self, query: &str) -> Result<(bool, SearchOutcome), reqwest::Error> {
        let response = self
            .client
            .post(&self.endpoint)
            .form(&[("query", query)])
            .send()
            .await?;

        let ok = response.status().is_success();
        let outcome = response.json::<SearchOutcome>().await?;
        Ok((ok, outcome))
    }
}
