//! Feed module
//!
//! Display formatting for the job feed.

pub mod locale;
pub mod renderer;

pub use locale::{parse_offset, Locale};
pub use renderer::{
    job_row, render_page, render_summary, EMPTY_TEXT, LOADING_TEXT, UNAVAILABLE_TEXT,
};
