//! Application layer
//!
//! Use cases orchestrating the feed source and the page elements.

pub mod feed_renderer;

pub use feed_renderer::{FeedRenderer, RenderOutcome};
