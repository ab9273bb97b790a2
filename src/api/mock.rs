//! Mock image API for testing purposes.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::api::{ApiError, ImageApi, PageRequest};
use crate::models::{FetchResponse, ImageHit};

/// A mock API serving a fixed result set, paginated like the real service.
#[derive(Debug, Default)]
pub struct MockApi {
    hits: Mutex<Vec<ImageHit>>,
    fail_next: Mutex<Option<String>>,
    requests: Mutex<Vec<PageRequest>>,
}

impl MockApi {
    /// Create a mock with no results.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock holding `total` generated hits.
    pub fn with_total(total: usize) -> Self {
        let api = Self::new();
        api.set_hits((0..total).map(make_hit).collect());
        api
    }

    /// Replace the result set.
    pub fn set_hits(&self, hits: Vec<ImageHit>) {
        let mut guard = self.hits.lock().unwrap();
        *guard = hits;
    }

    /// Make the next call fail with a network error.
    pub fn fail_next(&self, message: impl Into<String>) {
        let mut guard = self.fail_next.lock().unwrap();
        *guard = Some(message.into());
    }

    /// Requests received so far, in order.
    pub fn requests(&self) -> Vec<PageRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageApi for MockApi {
    fn name(&self) -> &str {
        "Mock API"
    }

    async fn search(&self, request: &PageRequest) -> Result<FetchResponse, ApiError> {
        self.requests.lock().unwrap().push(request.clone());

        if let Some(message) = self.fail_next.lock().unwrap().take() {
            return Err(ApiError::Network(message));
        }

        let hits = self.hits.lock().unwrap();
        let per_page = request.per_page.max(1) as usize;
        let start = (request.page.saturating_sub(1) as usize).saturating_mul(per_page);
        let page: Vec<ImageHit> = hits.iter().skip(start).take(per_page).cloned().collect();

        Ok(FetchResponse::new(page, hits.len() as u64))
    }
}

/// Helper function to create a mock hit for testing.
pub fn make_hit(index: usize) -> ImageHit {
    ImageHit::new(
        index as u64,
        format!("https://cdn.example.com/{}_640.jpg", index),
        format!("https://cdn.example.com/{}_1280.jpg", index),
        format!("tag{}, sample", index),
    )
    .stats(index as u64, 10 * index as u64, 1, 2)
}
