//! Feed renderer
//!
//! Turns feed entities into table rows and status text, and serializes rows
//! to HTML for the page host.

use v_htmlescape::escape;

use super::locale::{Locale, INVALID_DATE};
use crate::domain::entities::{FeedMeta, JobEntry};
use crate::domain::ports::{JobLink, JobRow};

pub const LOADING_TEXT: &str = "Loading feed";
pub const EMPTY_TEXT: &str = "No jobs available at the moment.";
pub const UNAVAILABLE_TEXT: &str = "Job feed is temporarily unavailable.";

/// Build the table row for a job.
///
/// Missing text fields render as empty cells; a missing `first_seen_at`
/// renders as `Invalid Date`.
pub fn job_row(job: &JobEntry, locale: &Locale) -> JobRow {
    JobRow {
        link: JobLink {
            text: job.title.clone().unwrap_or_default(),
            href: job.url.clone().unwrap_or_default(),
        },
        company: job.company.clone().unwrap_or_default(),
        source: job.source.clone().unwrap_or_default(),
        first_seen: job
            .first_seen_at
            .as_deref()
            .map(|raw| locale.format_date(raw))
            .unwrap_or_else(|| INVALID_DATE.to_string()),
    }
}

/// Status line shown after a successful render.
///
/// Without a reported `count` the number of rendered rows is shown.
pub fn render_summary(meta: &FeedMeta, rendered: usize, locale: &Locale) -> String {
    let generated = meta
        .generated_at
        .as_deref()
        .map(|raw| locale.format_datetime(raw))
        .unwrap_or_else(|| INVALID_DATE.to_string());
    let count = meta.count.unwrap_or(rendered as i64);

    format!("Updated {} · {} jobs", generated, count)
}

/// Serialize a row as a `<tr>` element
pub fn render_row_html(row: &JobRow) -> String {
    format!(
        r#"<tr><td><a href="{href}" target="{target}" rel="{rel}">{title}</a></td><td>{company}</td><td>{source}</td><td>{seen}</td></tr>"#,
        href = escape(&row.link.href),
        target = JobLink::TARGET,
        rel = JobLink::REL,
        title = escape(&row.link.text),
        company = escape(&row.company),
        source = escape(&row.source),
        seen = escape(&row.first_seen),
    )
}

/// Serialize the whole page around the status text and rows
pub fn render_page(title: &str, status: Option<&str>, rows: Option<&[JobRow]>) -> String {
    let mut buf = String::new();

    buf.push_str("<!DOCTYPE html>\n");
    buf.push_str("<html lang=\"en\">\n<head>\n");
    buf.push_str("<meta charset=\"utf-8\">\n");
    buf.push_str(&format!("<title>{}</title>\n", escape(title)));
    buf.push_str("</head>\n<body>\n");
    buf.push_str(&format!("<h1>{}</h1>\n", escape(title)));

    if let Some(text) = status {
        buf.push_str(&format!("<p id=\"meta\">{}</p>\n", escape(text)));
    }

    if let Some(rows) = rows {
        buf.push_str("<table id=\"jobs-table\">\n");
        buf.push_str(
            "<thead><tr><th>Title</th><th>Company</th><th>Source</th><th>First seen</th></tr></thead>\n",
        );
        buf.push_str("<tbody>\n");
        for row in rows {
            buf.push_str(&render_row_html(row));
            buf.push('\n');
        }
        buf.push_str("</tbody>\n</table>\n");
    }

    buf.push_str("</body>\n</html>\n");
    buf
}
