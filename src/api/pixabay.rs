//! Pixabay image search implementation.

use async_trait::async_trait;
use url::Url;

use crate::api::{ApiError, ImageApi, PageRequest};
use crate::config::ApiConfig;
use crate::models::FetchResponse;
use crate::utils::HttpClient;

/// Pixabay REST API client
#[derive(Debug, Clone)]
pub struct PixabayApi {
    http: HttpClient,
    base_url: Url,
    key: String,
    image_type: String,
    orientation: String,
    safesearch: bool,
}

impl PixabayApi {
    /// Create a client from configuration. Fails when no API key is available.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        let key = config
            .resolved_key()
            .ok_or_else(|| ApiError::Config("no API key (set PIXABAY_API_KEY)".to_string()))?;
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ApiError::Config(format!("invalid base URL {}: {}", config.base_url, e)))?;
        let http = HttpClient::with_timeout(config.timeout())
            .map_err(|e| ApiError::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url,
            key,
            image_type: config.image_type.clone(),
            orientation: config.orientation.clone(),
            safesearch: config.safesearch,
        })
    }

    /// Build the request URL for one page
    fn build_url(&self, request: &PageRequest) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("key", &self.key)
            .append_pair("q", &request.query)
            .append_pair("image_type", &self.image_type)
            .append_pair("orientation", &self.orientation)
            .append_pair("safesearch", if self.safesearch { "true" } else { "false" })
            .append_pair("page", &request.page.to_string())
            .append_pair("per_page", &request.per_page.to_string());
        url
    }
}

#[async_trait]
impl ImageApi for PixabayApi {
    fn name(&self) -> &str {
        "Pixabay"
    }

    async fn search(&self, request: &PageRequest) -> Result<FetchResponse, ApiError> {
        let url = self.build_url(request);
        tracing::debug!(query = %request.query, page = request.page, "Requesting Pixabay page");

        let response = self
            .http
            .client()
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to search Pixabay: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: message.trim().to_string(),
            });
        }

        let body = response.text().await?;
        let data: FetchResponse = serde_json::from_str(&body)?;
        Ok(data)
    }
}
