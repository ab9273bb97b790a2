//! Query client: current query, page cursor and paginated fetches.

use std::sync::Arc;

use crate::api::{ApiError, ImageApi, PageRequest, PAGE_SIZE};
use crate::models::{FetchResponse, SearchState};

/// Errors raised by the query client
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Refused to advance past the known last page
    #[error("No more pages (last page is {last_page})")]
    NoMorePages { last_page: u32 },
}

/// Holds the [`SearchState`] and performs fetches against an [`ImageApi`].
///
/// There is no caching and no guard against overlapping calls; the caller
/// serializes access.
#[derive(Debug, Clone)]
pub struct QueryClient {
    api: Arc<dyn ImageApi>,
    state: SearchState,
}

impl QueryClient {
    pub fn new(api: Arc<dyn ImageApi>) -> Self {
        Self {
            api,
            state: SearchState::default(),
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn query(&self) -> &str {
        &self.state.query
    }

    pub fn current_page(&self) -> u32 {
        self.state.current_page
    }

    pub fn last_page(&self) -> Option<u32> {
        self.state.last_page
    }

    pub fn has_more(&self) -> bool {
        self.state.has_more()
    }

    /// Store the trimmed query. `last_page` is forgotten until the next fetch.
    pub fn set_query(&mut self, text: &str) {
        let query = text.trim();
        if query != self.state.query {
            self.state.last_page = None;
        }
        self.state.query = query.to_string();
    }

    pub fn reset_page(&mut self) {
        self.state.current_page = 1;
    }

    /// Advance the cursor. Refuses to move past a known last page.
    pub fn increment_page(&mut self) -> Result<u32, ClientError> {
        if let Some(last_page) = self.state.last_page {
            if self.state.current_page >= last_page {
                return Err(ClientError::NoMorePages { last_page });
            }
        }
        self.state.current_page += 1;
        Ok(self.state.current_page)
    }

    /// Step the cursor back one page, never below 1.
    pub fn rewind_page(&mut self) {
        self.state.current_page = self.state.current_page.saturating_sub(1).max(1);
    }

    /// Fetch the current page and recompute `last_page` from `totalHits`.
    ///
    /// Single attempt; failures propagate unchanged.
    pub async fn fetch_page(&mut self) -> Result<FetchResponse, ClientError> {
        let request = PageRequest::new(self.state.query.clone(), self.state.current_page);
        tracing::info!(
            api = self.api.name(),
            query = %request.query,
            page = request.page,
            "Fetching page"
        );

        let response = self.api.search(&request).await?;

        let mut last_page = SearchState::last_page_for(response.total_hits, PAGE_SIZE);
        if self.state.current_page > 1 && last_page < self.state.current_page {
            // Result set shrank under the cursor; the current page becomes the end.
            tracing::warn!(
                current_page = self.state.current_page,
                reported_last_page = last_page,
                "Total hits shrank below the current page"
            );
            last_page = self.state.current_page;
        }
        self.state.last_page = Some(last_page);
        tracing::debug!(
            total_hits = response.total_hits,
            hits = response.hits.len(),
            last_page,
            "Page fetched"
        );

        Ok(response)
    }
}
