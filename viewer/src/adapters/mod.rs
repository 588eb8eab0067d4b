//! Adapters layer
//!
//! Concrete implementations of the domain port traits.

pub mod http;
pub mod page;

pub use http::FeedClient;
pub use page::HtmlPage;
