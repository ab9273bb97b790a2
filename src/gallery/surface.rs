//! Gallery container surfaces.

use super::GalleryError;

/// Class of the gallery container element
pub const GALLERY_CLASS: &str = "gallery";

/// The container cards are rendered into.
pub trait GallerySurface: std::fmt::Debug {
    /// Remove all content.
    fn clear(&mut self) -> Result<(), GalleryError>;

    /// Append markup after the existing content.
    fn append_html(&mut self, html: &str) -> Result<(), GalleryError>;

    /// Outer markup of the container, including its own element.
    fn html(&self) -> String;
}

/// In-memory gallery container.
#[derive(Debug, Clone, Default)]
pub struct HtmlGallery {
    inner: String,
}

impl HtmlGallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl GallerySurface for HtmlGallery {
    fn clear(&mut self) -> Result<(), GalleryError> {
        self.inner.clear();
        Ok(())
    }

    fn append_html(&mut self, html: &str) -> Result<(), GalleryError> {
        self.inner.push_str(html);
        Ok(())
    }

    fn html(&self) -> String {
        format!("<div class=\"{}\">{}</div>", GALLERY_CLASS, self.inner)
    }
}
