//! Utility modules supporting the search widget.
//!
//! - [`HttpClient`]: shared HTTP client with sensible defaults
//! - [`Debouncer`]: trailing-edge rate limiter driven by explicit timestamps
//!
//! # Debouncing
//!
//! ```rust
//! use image_finder::utils::Debouncer;
//! use std::time::{Duration, Instant};
//!
//! let mut debouncer = Debouncer::new(Duration::from_millis(200));
//! let start = Instant::now();
//!
//! debouncer.call("c", start);
//! debouncer.call("ca", start + Duration::from_millis(50));
//! assert_eq!(debouncer.poll(start + Duration::from_millis(100)), None);
//! assert_eq!(debouncer.poll(start + Duration::from_millis(250)), Some("ca"));
//! ```

mod debounce;
mod http;

pub use debounce::Debouncer;
pub use http::HttpClient;
