//! In-memory page document
//!
//! Stands in for the browser page: a `#meta` status paragraph and the body
//! of `#jobs-table`. Either element can be left out to model a page that
//! lacks it.

use crate::domain::ports::{JobRow, JobTable, StatusLine};
use crate::feed::render_page;

pub const DEFAULT_TITLE: &str = "OpenJobsEU";

/// The `#meta` status paragraph
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusElement {
    text: String,
}

impl StatusElement {
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl StatusLine for StatusElement {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

/// The `<tbody>` of `#jobs-table`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableBody {
    rows: Vec<JobRow>,
}

impl TableBody {
    pub fn rows(&self) -> &[JobRow] {
        &self.rows
    }
}

impl JobTable for TableBody {
    fn clear(&mut self) {
        self.rows.clear();
    }

    fn append_row(&mut self, row: JobRow) {
        self.rows.push(row);
    }
}

#[derive(Debug, Clone)]
pub struct HtmlPage {
    title: String,
    meta: Option<StatusElement>,
    jobs_table: Option<TableBody>,
}

impl HtmlPage {
    /// A page with both elements present
    pub fn new(title: &str) -> Self {
        Self::with_elements(title, true, true)
    }

    pub fn with_elements(title: &str, has_meta: bool, has_table: bool) -> Self {
        Self {
            title: title.to_string(),
            meta: has_meta.then(StatusElement::default),
            jobs_table: has_table.then(TableBody::default),
        }
    }

    /// Borrow both elements at once for a render pass
    pub fn elements_mut(&mut self) -> (Option<&mut StatusElement>, Option<&mut TableBody>) {
        (self.meta.as_mut(), self.jobs_table.as_mut())
    }

    pub fn status_text(&self) -> Option<&str> {
        self.meta.as_ref().map(StatusElement::text)
    }

    pub fn rows(&self) -> Option<&[JobRow]> {
        self.jobs_table.as_ref().map(TableBody::rows)
    }

    pub fn to_html(&self) -> String {
        render_page(&self.title, self.status_text(), self.rows())
    }
}

impl Default for HtmlPage {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}
