//! Page element port traits
//!
//! The renderer only ever touches two elements: the status line and the body
//! of the jobs table. Hosts hand them in explicitly.

/// Hyperlink cell of a job row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobLink {
    pub text: String,
    pub href: String,
}

impl JobLink {
    /// Links always open in a new tab
    pub const TARGET: &'static str = "_blank";
    /// New tabs get no `window.opener` back-reference
    pub const REL: &'static str = "noopener";
}

/// One rendered row of the jobs table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRow {
    pub link: JobLink,
    pub company: String,
    pub source: String,
    /// `first_seen_at` already formatted for display
    pub first_seen: String,
}

/// Status / meta text container
pub trait StatusLine {
    fn set_text(&mut self, text: &str);
}

/// Body of the jobs table
pub trait JobTable {
    /// Remove every row
    fn clear(&mut self);

    /// Append a row after the existing ones
    fn append_row(&mut self, row: JobRow);
}
