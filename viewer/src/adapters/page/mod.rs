//! Page adapter

mod document;

pub use document::HtmlPage;
