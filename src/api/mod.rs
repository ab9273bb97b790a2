//! Image search API collaborators.
//!
//! This module defines the [`ImageApi`] trait the query client talks to.
//! [`PixabayApi`] is the production implementation over HTTP; [`MockApi`]
//! serves canned pages for tests and offline demos.
//!
//! Every call is a single attempt: there is no retry and no caching here.

pub mod mock;
mod pixabay;

pub use mock::MockApi;
pub use pixabay::PixabayApi;

use async_trait::async_trait;

use crate::models::FetchResponse;

/// Number of hits requested per page. Not user-configurable.
pub const PAGE_SIZE: u32 = 40;

/// Parameters of one page request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub query: String,
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    pub fn new(query: impl Into<String>, page: u32) -> Self {
        Self {
            query: query.into(),
            page,
            per_page: PAGE_SIZE,
        }
    }
}

/// A remote image search service.
#[async_trait]
pub trait ImageApi: Send + Sync + std::fmt::Debug {
    /// Human-readable name of this provider
    fn name(&self) -> &str;

    /// Fetch one page of results
    async fn search(&self, request: &PageRequest) -> Result<FetchResponse, ApiError>;
}

/// Errors that can occur when talking to the search API
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport failure (DNS, connect, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Response body could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// Client is not usable as configured
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Parse(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Parse(format!("JSON: {}", err))
    }
}
