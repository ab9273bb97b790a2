//! Application controller.
//!
//! [`AppContext`] is created once at startup and owns everything the handlers
//! touch: the query client, the gallery, the notifier, the form controls and
//! the debouncers. Handlers are methods taking `&mut self`, so one handler
//! sequence always completes before the next begins.
//!
//! ```text
//! Idle ──submit──▶ Searching ──hits──▶ Displaying(HasMore | AtEnd)
//!   ▲                  │                    │        ▲
//!   └────no hits───────┘               load-more     │
//!                                           ▼        │
//!                                      LoadingMore ──┘
//! ```
//!
//! Time-based behaviour (input and scroll debouncing) advances only through
//! [`AppContext::tick`], which the front end calls with the current instant.

mod scroll;
mod state;

pub use scroll::EndOfResultsWatcher;
pub use state::{AppState, PageRefs, Pagination, Viewport};

use std::sync::Arc;
use std::time::Instant;

use crate::api::{ApiError, ImageApi};
use crate::client::{ClientError, QueryClient};
use crate::config::Config;
use crate::gallery::{document, GalleryError, GalleryRenderer, HtmlGallery, SimpleLightbox};
use crate::models::FetchResponse;
use crate::ui::{hide_button, show_button, Notifier};
use crate::utils::Debouncer;

/// User-facing notification texts
pub mod messages {
    pub const NO_RESULTS: &str =
        "Sorry, there are no images matching your search query. Please try again.";
    pub const GENERIC_FAILURE: &str = "Oops, something went wrong. Try again";
    pub const END_OF_RESULTS: &str = "We're sorry, but you've reached the end of search results";

    /// Success text with the count, singular only for exactly one image
    pub fn found(total_hits: u64) -> String {
        let noun = if total_hits == 1 { "image" } else { "images" };
        format!("Hooray! We found {} {}", total_hits, noun)
    }
}

/// Any failure inside a handler sequence
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Gallery(#[from] GalleryError),
}

/// Explicit application context passed to every handler.
#[derive(Debug)]
pub struct AppContext {
    client: QueryClient,
    gallery: GalleryRenderer,
    notifier: Box<dyn Notifier>,
    refs: PageRefs,
    viewport: Viewport,
    state: AppState,
    input_checks: Debouncer<String>,
    end_watcher: EndOfResultsWatcher,
}

impl AppContext {
    pub fn new(
        client: QueryClient,
        gallery: GalleryRenderer,
        notifier: Box<dyn Notifier>,
        config: &Config,
    ) -> Self {
        Self {
            client,
            gallery,
            notifier,
            refs: PageRefs::default(),
            viewport: Viewport::default(),
            state: AppState::Idle,
            input_checks: Debouncer::new(config.timing.input_quiet()),
            end_watcher: EndOfResultsWatcher::new(config.timing.scroll_quiet()),
        }
    }

    /// Wire an API to an in-memory gallery and a selector-driven lightbox.
    pub fn with_api(
        api: Arc<dyn ImageApi>,
        notifier: Box<dyn Notifier>,
        config: &Config,
    ) -> Result<Self, AppError> {
        let gallery = GalleryRenderer::new(
            Box::new(HtmlGallery::new()),
            Box::new(SimpleLightbox::new(&config.lightbox)?),
        );
        Ok(Self::new(QueryClient::new(api), gallery, notifier, config))
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn client(&self) -> &QueryClient {
        &self.client
    }

    pub fn gallery(&self) -> &GalleryRenderer {
        &self.gallery
    }

    pub fn refs(&self) -> &PageRefs {
        &self.refs
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn is_end_watcher_armed(&self) -> bool {
        self.end_watcher.is_armed()
    }

    /// Earliest instant at which [`tick`](Self::tick) has pending work.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.input_checks.deadline(), self.end_watcher.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// The current page as a standalone HTML document.
    pub fn render_document(&self) -> String {
        document(
            self.client.query(),
            &self.gallery.surface().html(),
            !self.refs.load_button.hidden,
        )
    }

    // ========== EVENT HANDLERS ==========

    /// Search input changed. The enable/disable check runs after the quiet period.
    pub fn on_input(&mut self, text: &str, now: Instant) {
        self.refs.input = text.to_string();
        self.input_checks.call(text.to_string(), now);
    }

    /// Page scrolled. Only relevant while the end-of-results watcher is armed.
    pub fn on_scroll(&mut self, viewport: Viewport, now: Instant) {
        self.viewport = viewport;
        self.end_watcher.on_scroll(viewport, now);
    }

    /// Run debounced work that has become due.
    pub fn tick(&mut self, now: Instant) {
        if let Some(text) = self.input_checks.poll(now) {
            self.check_input(&text);
        }

        if self.end_watcher.poll(now, self.client.last_page()) {
            tracing::info!(page = self.client.current_page(), "Reached end of results");
            self.notifier.warning(messages::END_OF_RESULTS);
        }
    }

    /// Search form submitted.
    pub async fn on_submit(&mut self) {
        if self.refs.search_button.disabled || self.state.is_busy() {
            tracing::debug!(state = ?self.state, "Submit ignored");
            return;
        }

        self.refs.search_button.disabled = true;
        self.end_watcher.disarm();
        self.state = AppState::Searching;

        if let Err(err) = self.submit().await {
            hide_button(&mut self.refs.load_button);
            self.state = AppState::Idle;
            self.handle_error(err);
        }
    }

    /// Load-more clicked.
    pub async fn on_load_more(&mut self) {
        if !self.refs.load_button.is_actionable() || self.state.is_busy() {
            tracing::debug!(state = ?self.state, "Load more ignored");
            return;
        }
        if !self.client.has_more() {
            tracing::debug!(page = self.client.current_page(), "No further page to load");
            return;
        }

        self.refs.load_button.disabled = true;
        self.state = AppState::LoadingMore;

        let result = self.load_more().await;
        self.refs.load_button.disabled = false;

        if let Err(err) = result {
            self.check_last_page();
            self.handle_error(err);
        }
    }

    // ========== SEQUENCES ==========

    fn check_input(&mut self, text: &str) {
        let disabled = text.trim().is_empty();
        if self.refs.search_button.disabled != disabled {
            tracing::debug!(disabled, "Submit button toggled");
        }
        self.refs.search_button.disabled = disabled;
    }

    async fn submit(&mut self) -> Result<(), AppError> {
        let input = self.refs.input.clone();
        self.client.set_query(&input);
        self.client.reset_page();

        let response = self.client.fetch_page().await?;
        self.viewport.scroll_to_top();

        if response.total_hits == 0 {
            self.notifier.failure(messages::NO_RESULTS);
            self.gallery.clear()?;
            hide_button(&mut self.refs.load_button);
            self.state = AppState::Idle;
            return Ok(());
        }

        self.show_first_page(response)
    }

    fn show_first_page(&mut self, response: FetchResponse) -> Result<(), AppError> {
        self.gallery.clear()?;
        self.gallery.render(&response.hits)?;
        self.notifier.success(&messages::found(response.total_hits));
        self.check_last_page();
        Ok(())
    }

    async fn load_more(&mut self) -> Result<(), AppError> {
        self.client.increment_page()?;

        let response = match self.client.fetch_page().await {
            Ok(response) => response,
            Err(err) => {
                self.client.rewind_page();
                return Err(err.into());
            }
        };

        self.gallery.render(&response.hits)?;
        self.check_last_page();
        Ok(())
    }

    /// Hide load-more and arm the watcher on the last page, otherwise show it.
    fn check_last_page(&mut self) {
        let pagination = self.pagination();
        match pagination {
            Pagination::AtEnd => {
                hide_button(&mut self.refs.load_button);
                self.end_watcher.arm(self.client.current_page());
            }
            Pagination::HasMore => show_button(&mut self.refs.load_button, self.client.state()),
        }
        self.state = AppState::Displaying(pagination);
    }

    fn pagination(&self) -> Pagination {
        if self.client.has_more() {
            Pagination::HasMore
        } else {
            Pagination::AtEnd
        }
    }

    fn handle_error(&self, err: AppError) {
        tracing::error!(error = %err, "Handler failed");
        self.notifier.failure(messages::GENERIC_FAILURE);
    }
}
