//! Integration tests for Image Finder
//!
//! These tests drive the application context through full user flows with a
//! mock API, a recording notifier and the in-memory gallery.

use image_finder::api::mock::make_hit;
use image_finder::api::{MockApi, PixabayApi};
use image_finder::app::{messages, AppContext, AppState, Pagination, Viewport};
use image_finder::config::{ApiConfig, Config};
use image_finder::ui::{Level, RecordingNotifier};
use scraper::{Html, Selector};
use std::sync::Arc;
use std::time::{Duration, Instant};

const INPUT_QUIET: Duration = Duration::from_millis(200);
const SCROLL_QUIET: Duration = Duration::from_millis(500);

fn setup(total: usize) -> (Arc<MockApi>, RecordingNotifier, AppContext) {
    let api = Arc::new(MockApi::with_total(total));
    let notifier = RecordingNotifier::new();
    let ctx = AppContext::with_api(api.clone(), Box::new(notifier.clone()), &Config::default())
        .expect("context should build with default config");
    (api, notifier, ctx)
}

/// Type into the search input and let the debounced check run
fn type_query(ctx: &mut AppContext, text: &str) {
    let now = Instant::now();
    ctx.on_input(text, now);
    ctx.tick(now + INPUT_QUIET);
}

/// Number of rendered cards in the gallery container
fn rendered_cards(ctx: &AppContext) -> usize {
    let fragment = Html::parse_fragment(&ctx.gallery().surface().html());
    let selector = Selector::parse(".gallery .photo-card").unwrap();
    fragment.select(&selector).count()
}

fn scroll_to_bottom(ctx: &mut AppContext, now: Instant) {
    ctx.on_scroll(Viewport::new(900, 2100, 3000), now);
}

/// Scenario: 85 results, page size 40: three pages, two load-more clicks
#[tokio::test]
async fn test_cats_paginate_to_end() {
    let (api, notifier, mut ctx) = setup(85);

    type_query(&mut ctx, "cats");
    ctx.on_submit().await;

    assert_eq!(ctx.client().last_page(), Some(3));
    assert_eq!(rendered_cards(&ctx), 40);
    assert!(!ctx.refs().load_button.hidden);
    assert_eq!(ctx.state(), AppState::Displaying(Pagination::HasMore));
    assert_eq!(
        notifier.last().map(|n| (n.level, n.message)),
        Some((Level::Success, "Hooray! We found 85 images".to_string()))
    );

    ctx.on_load_more().await;
    assert_eq!(ctx.client().current_page(), 2);
    assert_eq!(rendered_cards(&ctx), 80);
    assert!(!ctx.refs().load_button.hidden);
    assert!(!ctx.is_end_watcher_armed());

    ctx.on_load_more().await;
    assert_eq!(ctx.client().current_page(), 3);
    assert_eq!(rendered_cards(&ctx), 85);
    assert!(ctx.refs().load_button.hidden);
    assert!(ctx.is_end_watcher_armed());
    assert_eq!(ctx.state(), AppState::Displaying(Pagination::AtEnd));

    // Hidden button: further clicks never reach the API
    ctx.on_load_more().await;
    assert_eq!(api.requests().len(), 3);
    assert!(ctx.client().current_page() <= ctx.client().last_page().unwrap());

    let pages: Vec<u32> = api.requests().iter().map(|r| r.page).collect();
    assert_eq!(pages, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_end_of_results_warning_once() {
    let (_, notifier, mut ctx) = setup(30);

    type_query(&mut ctx, "sunset");
    ctx.on_submit().await;
    assert!(ctx.refs().load_button.hidden);
    assert!(ctx.is_end_watcher_armed());

    let t0 = Instant::now();

    // Not yet at the bottom
    ctx.on_scroll(Viewport::new(900, 100, 3000), t0);
    ctx.tick(t0 + SCROLL_QUIET);
    assert_eq!(notifier.count(Level::Warning), 0);

    // Burst of scrolls: only the settled position counts
    scroll_to_bottom(&mut ctx, t0 + SCROLL_QUIET);
    ctx.on_scroll(Viewport::new(900, 2000, 3000), t0 + SCROLL_QUIET + Duration::from_millis(100));
    scroll_to_bottom(&mut ctx, t0 + SCROLL_QUIET + Duration::from_millis(200));
    ctx.tick(t0 + SCROLL_QUIET + Duration::from_millis(400));
    assert_eq!(notifier.count(Level::Warning), 0);

    ctx.tick(t0 + SCROLL_QUIET * 2 + Duration::from_millis(200));
    assert_eq!(notifier.count(Level::Warning), 1);
    assert_eq!(
        notifier.last().map(|n| n.message),
        Some(messages::END_OF_RESULTS.to_string())
    );
    assert!(!ctx.is_end_watcher_armed());

    // Deregistered: later scrolls are silent
    let t1 = t0 + Duration::from_secs(5);
    scroll_to_bottom(&mut ctx, t1);
    ctx.tick(t1 + SCROLL_QUIET);
    assert_eq!(notifier.count(Level::Warning), 1);
}

#[tokio::test]
async fn test_zero_hits_clears_gallery() {
    let (api, notifier, mut ctx) = setup(85);

    type_query(&mut ctx, "cats");
    ctx.on_submit().await;
    assert_eq!(rendered_cards(&ctx), 40);

    api.set_hits(Vec::new());
    type_query(&mut ctx, "qwxzv");
    ctx.on_submit().await;

    assert_eq!(rendered_cards(&ctx), 0);
    assert!(ctx.refs().load_button.hidden);
    assert_eq!(ctx.state(), AppState::Idle);
    assert_eq!(ctx.client().last_page(), Some(0));
    assert_eq!(
        notifier.last().map(|n| (n.level, n.message)),
        Some((Level::Failure, messages::NO_RESULTS.to_string()))
    );
}

#[tokio::test]
async fn test_single_result_uses_singular() {
    let (_, notifier, mut ctx) = setup(1);

    type_query(&mut ctx, "unicorn");
    ctx.on_submit().await;

    assert_eq!(rendered_cards(&ctx), 1);
    assert_eq!(
        notifier.last().map(|n| n.message),
        Some("Hooray! We found 1 image".to_string())
    );
    assert!(ctx.refs().load_button.hidden);
}

#[tokio::test]
async fn test_empty_query_never_fetches() {
    let (api, notifier, mut ctx) = setup(85);

    type_query(&mut ctx, "   ");
    assert!(ctx.refs().search_button.disabled);

    ctx.on_submit().await;

    assert!(api.requests().is_empty());
    assert!(notifier.notifications().is_empty());
    assert!(ctx.refs().load_button.hidden);
}

#[tokio::test]
async fn test_new_search_resets_page_and_disarms_watcher() {
    let (api, _, mut ctx) = setup(50);

    type_query(&mut ctx, "cats");
    ctx.on_submit().await;
    ctx.on_load_more().await;
    assert_eq!(ctx.client().current_page(), 2);
    assert!(ctx.is_end_watcher_armed());

    type_query(&mut ctx, "dogs");
    ctx.on_submit().await;

    assert_eq!(ctx.client().query(), "dogs");
    assert_eq!(ctx.client().current_page(), 1);
    assert_eq!(rendered_cards(&ctx), 40);
    assert!(!ctx.is_end_watcher_armed());
    assert_eq!(api.requests().last().map(|r| r.page), Some(1));
}

#[tokio::test]
async fn test_submit_requires_fresh_input_check() {
    let (api, _, mut ctx) = setup(85);

    type_query(&mut ctx, "cats");
    ctx.on_submit().await;

    // Submit stays disabled until the input is checked again
    ctx.on_submit().await;
    assert_eq!(api.requests().len(), 1);

    type_query(&mut ctx, "cats");
    ctx.on_submit().await;
    assert_eq!(api.requests().len(), 2);
}

#[tokio::test]
async fn test_malformed_hit_reports_failure_and_recovers() {
    let (api, notifier, mut ctx) = setup(0);
    let mut broken = make_hit(1);
    broken.thumbnail_url.clear();
    api.set_hits(vec![make_hit(0), broken]);

    type_query(&mut ctx, "broken");
    ctx.on_submit().await;

    assert_eq!(rendered_cards(&ctx), 0);
    assert_eq!(
        notifier.last().map(|n| (n.level, n.message)),
        Some((Level::Failure, messages::GENERIC_FAILURE.to_string()))
    );
    assert_eq!(ctx.state(), AppState::Idle);

    api.set_hits((0..3).map(make_hit).collect());
    type_query(&mut ctx, "fixed");
    ctx.on_submit().await;
    assert_eq!(rendered_cards(&ctx), 3);
}

#[tokio::test]
async fn test_lightbox_tracks_rendered_cards() {
    let (_, _, mut ctx) = setup(45);

    type_query(&mut ctx, "cats");
    ctx.on_submit().await;
    ctx.on_load_more().await;

    let items = ctx.gallery().lightbox().items();
    assert_eq!(items.len(), 45);
    assert_eq!(items[44].href, "https://cdn.example.com/44_1280.jpg");
    assert_eq!(items[44].caption.as_deref(), Some("tag44, sample"));
}

#[tokio::test]
async fn test_document_reflects_button_state() {
    let (_, _, mut ctx) = setup(85);

    type_query(&mut ctx, "cats");
    ctx.on_submit().await;
    assert!(ctx.render_document().contains("class=\"load-more\""));

    ctx.on_load_more().await;
    ctx.on_load_more().await;
    let page = ctx.render_document();
    assert!(page.contains("class=\"load-more is-hidden\""));
    assert!(page.contains("<title>cats</title>"));
}

#[tokio::test]
async fn test_pixabay_end_to_end() {
    let mut server = mockito::Server::new_async().await;
    let hits: Vec<String> = (0..40)
        .map(|i| {
            format!(
                r#"{{"id":{i},"webformatURL":"https://cdn/{i}_640.jpg","largeImageURL":"https://cdn/{i}_1280.jpg","tags":"cat","likes":1,"views":2,"comments":3,"downloads":4}}"#
            )
        })
        .collect();
    let body = format!(r#"{{"total":85,"totalHits":85,"hits":[{}]}}"#, hits.join(","));

    let mock = server
        .mock("GET", "/api/")
        .match_query(mockito::Matcher::UrlEncoded("q".into(), "cats".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;

    let config = Config {
        api: ApiConfig {
            base_url: format!("{}/api/", server.url()),
            key: Some("test-key".to_string()),
            ..ApiConfig::default()
        },
        ..Config::default()
    };
    let api = Arc::new(PixabayApi::from_config(&config.api).unwrap());
    let notifier = RecordingNotifier::new();
    let mut ctx = AppContext::with_api(api, Box::new(notifier.clone()), &config).unwrap();

    type_query(&mut ctx, "cats");
    ctx.on_submit().await;

    mock.assert_async().await;
    assert_eq!(rendered_cards(&ctx), 40);
    assert_eq!(ctx.client().last_page(), Some(3));
    assert_eq!(notifier.count(Level::Success), 1);
}
