//! # Image Finder
//!
//! Paginated image search with a rendered gallery, incremental "load more",
//! end-of-results detection and a lightbox over the rendered cards.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Core data structures (ImageHit, FetchResponse, SearchState)
//! - [`api`]: Search API trait with the Pixabay and mock implementations
//! - [`client`]: Query client holding the query and page cursor
//! - [`gallery`]: Card markup, gallery surfaces and the lightbox
//! - [`ui`]: Buttons, notifications and terminal output helpers
//! - [`app`]: Application context and event handlers
//! - [`utils`]: HTTP client and debouncing
//! - [`config`]: Configuration management

pub mod api;
pub mod app;
pub mod client;
pub mod config;
pub mod gallery;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use api::{ImageApi, PAGE_SIZE};
pub use app::AppContext;
pub use models::{FetchResponse, ImageHit, SearchState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
