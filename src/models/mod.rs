//! Core data models for image results and search state.

mod image;
mod search;

pub use image::{FetchResponse, ImageHit};
pub use search::SearchState;
