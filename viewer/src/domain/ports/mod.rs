//! Domain ports (traits)
//!
//! Port traits define interfaces that the renderer requires.
//! Adapters provide concrete implementations of these traits.

pub mod feed_source;
pub mod page;

pub use feed_source::FeedSource;
pub use page::{JobLink, JobRow, JobTable, StatusLine};
