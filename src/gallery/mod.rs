//! Gallery renderer.
//!
//! Turns image hits into card markup, appends it to a [`GallerySurface`] and
//! asks the [`Lightbox`] to rescan the container afterwards.

mod lightbox;
mod markup;
mod surface;

pub use lightbox::{Lightbox, LightboxItem, SimpleLightbox};
pub use markup::{card_markup, document, escape_html, gallery_markup};
pub use surface::{GallerySurface, HtmlGallery, GALLERY_CLASS};

use crate::models::ImageHit;

/// Errors raised while rendering
#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    /// A hit is missing data needed to render it
    #[error("Malformed image hit {id}: {reason}")]
    MalformedHit { id: u64, reason: String },

    /// The lightbox selector could not be parsed
    #[error("Invalid selector {selector:?}: {message}")]
    InvalidSelector { selector: String, message: String },

    /// The surface rejected an update
    #[error("Render error: {0}")]
    Surface(String),
}

/// Renders hits into a surface and keeps the lightbox in sync.
#[derive(Debug)]
pub struct GalleryRenderer {
    surface: Box<dyn GallerySurface>,
    lightbox: Box<dyn Lightbox>,
}

impl GalleryRenderer {
    pub fn new(surface: Box<dyn GallerySurface>, lightbox: Box<dyn Lightbox>) -> Self {
        Self { surface, lightbox }
    }

    pub fn surface(&self) -> &dyn GallerySurface {
        self.surface.as_ref()
    }

    pub fn lightbox(&self) -> &dyn Lightbox {
        self.lightbox.as_ref()
    }

    /// Empty the gallery container.
    pub fn clear(&mut self) -> Result<(), GalleryError> {
        self.surface.clear()
    }

    /// Append one card per hit, then refresh the lightbox.
    ///
    /// Hits are validated first; a malformed hit aborts before anything is appended.
    pub fn render(&mut self, hits: &[ImageHit]) -> Result<usize, GalleryError> {
        for hit in hits {
            validate(hit)?;
        }

        self.surface.append_html(&gallery_markup(hits))?;
        let linked = self.lightbox.refresh(&self.surface.html())?;
        tracing::debug!(rendered = hits.len(), linked, "Gallery updated");

        Ok(hits.len())
    }
}

fn validate(hit: &ImageHit) -> Result<(), GalleryError> {
    if hit.thumbnail_url.trim().is_empty() {
        return Err(GalleryError::MalformedHit {
            id: hit.id,
            reason: "missing thumbnail URL".to_string(),
        });
    }
    if hit.full_size_url.trim().is_empty() {
        return Err(GalleryError::MalformedHit {
            id: hit.id,
            reason: "missing full-size URL".to_string(),
        });
    }
    Ok(())
}
