//! Lightbox collaborator.

use scraper::{Html, Selector};
use std::time::Duration;

use super::GalleryError;
use crate::config::LightboxConfig;

/// One enlargeable item found in the container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxItem {
    pub href: String,
    pub caption: Option<String>,
}

/// Overlay viewer over the gallery's links.
pub trait Lightbox: std::fmt::Debug {
    /// Rescan the container markup for linkable items. Returns how many were found.
    fn refresh(&mut self, container_html: &str) -> Result<usize, GalleryError>;

    /// Items known since the last refresh.
    fn items(&self) -> &[LightboxItem];
}

/// Selector-driven lightbox: anchors matching the selector become items,
/// captioned from an attribute of the image inside them.
#[derive(Debug, Clone)]
pub struct SimpleLightbox {
    selector: Selector,
    image: Selector,
    captions_data: String,
    fade_speed: Duration,
    items: Vec<LightboxItem>,
}

impl SimpleLightbox {
    pub fn new(config: &LightboxConfig) -> Result<Self, GalleryError> {
        Ok(Self {
            selector: parse_selector(&config.selector)?,
            image: parse_selector("img")?,
            captions_data: config.captions_data.clone(),
            fade_speed: Duration::from_millis(config.fade_speed_ms),
            items: Vec::new(),
        })
    }

    pub fn fade_speed(&self) -> Duration {
        self.fade_speed
    }
}

impl Lightbox for SimpleLightbox {
    fn refresh(&mut self, container_html: &str) -> Result<usize, GalleryError> {
        let fragment = Html::parse_fragment(container_html);

        self.items = fragment
            .select(&self.selector)
            .filter_map(|link| {
                let href = link.value().attr("href")?.to_string();
                let caption = link
                    .select(&self.image)
                    .next()
                    .and_then(|img| img.value().attr(&self.captions_data))
                    .map(str::to_string);
                Some(LightboxItem { href, caption })
            })
            .collect();

        Ok(self.items.len())
    }

    fn items(&self) -> &[LightboxItem] {
        &self.items
    }
}

fn parse_selector(selector: &str) -> Result<Selector, GalleryError> {
    Selector::parse(selector).map_err(|e| GalleryError::InvalidSelector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}
