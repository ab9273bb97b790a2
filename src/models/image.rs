//! Image result models as returned by the search API.

use serde::{Deserialize, Serialize};

/// One image result record (a "hit").
///
/// Field names follow the Pixabay wire format; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageHit {
    /// Provider-side identifier
    #[serde(default)]
    pub id: u64,

    /// Thumbnail shown in the gallery
    #[serde(rename = "webformatURL")]
    pub thumbnail_url: String,

    /// Full-size image opened by the lightbox
    #[serde(rename = "largeImageURL")]
    pub full_size_url: String,

    /// Comma separated tags, used as caption and alt text
    #[serde(default)]
    pub tags: String,

    #[serde(default)]
    pub likes: u64,

    #[serde(default)]
    pub views: u64,

    #[serde(default)]
    pub comments: u64,

    #[serde(default)]
    pub downloads: u64,
}

impl ImageHit {
    /// Create a hit with zeroed statistics
    pub fn new(
        id: u64,
        thumbnail_url: impl Into<String>,
        full_size_url: impl Into<String>,
        tags: impl Into<String>,
    ) -> Self {
        Self {
            id,
            thumbnail_url: thumbnail_url.into(),
            full_size_url: full_size_url.into(),
            tags: tags.into(),
            likes: 0,
            views: 0,
            comments: 0,
            downloads: 0,
        }
    }

    /// Set the four statistic fields
    pub fn stats(mut self, likes: u64, views: u64, comments: u64, downloads: u64) -> Self {
        self.likes = likes;
        self.views = views;
        self.comments = comments;
        self.downloads = downloads;
        self
    }
}

/// One page of results. Transient: produced per request and dropped after rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchResponse {
    /// Total matches reported by the provider (may exceed what is reachable)
    #[serde(default)]
    pub total: u64,

    /// Matches reachable through pagination
    #[serde(default)]
    pub total_hits: u64,

    /// Hits on this page, in provider order
    #[serde(default)]
    pub hits: Vec<ImageHit>,
}

impl FetchResponse {
    pub fn new(hits: Vec<ImageHit>, total_hits: u64) -> Self {
        Self {
            total: total_hits,
            total_hits,
            hits,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_hits == 0
    }
}
