//! Feed renderer service
//!
//! Runs one render pass: loading text, one fetch, then either rows plus a
//! summary, the empty message, or the unavailable message. The page elements
//! are injected by the host and reused for the whole pass.

use std::sync::Arc;

use crate::domain::entities::{FeedListing, FeedResponse};
use crate::domain::ports::{FeedSource, JobTable, StatusLine};
use crate::feed::{job_row, render_summary, Locale, EMPTY_TEXT, LOADING_TEXT, UNAVAILABLE_TEXT};

/// Result of a render pass, for the host and for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// A required element was missing; nothing was touched or fetched
    Skipped,
    /// The feed had no jobs
    Empty,
    /// Rows were rendered
    Rendered { rows: usize },
    /// The feed could not be fetched or decoded
    Unavailable,
}

/// Service that renders the job feed into the page
pub struct FeedRenderer<F>
where
    F: FeedSource,
{
    source: Arc<F>,
    locale: Locale,
}

impl<F> FeedRenderer<F>
where
    F: FeedSource,
{
    pub fn new(source: Arc<F>, locale: Locale) -> Self {
        Self { source, locale }
    }

    /// Render the feed into the given elements.
    ///
    /// Does nothing unless both elements are present. On failure the table is
    /// left exactly as it was.
    pub async fn init<S, T>(&self, status: Option<&mut S>, table: Option<&mut T>) -> RenderOutcome
    where
        S: StatusLine,
        T: JobTable,
    {
        let (status, table) = match (status, table) {
            (Some(status), Some(table)) => (status, table),
            (status, table) => {
                if cfg!(debug_assertions) {
                    tracing::warn!(
                        missing_status = status.is_none(),
                        missing_table = table.is_none(),
                        "Job feed page elements missing, skipping render"
                    );
                }
                return RenderOutcome::Skipped;
            }
        };

        status.set_text(LOADING_TEXT);

        let listing = match self
            .source
            .fetch_feed()
            .await
            .and_then(FeedResponse::into_listing)
        {
            Ok(listing) => listing,
            Err(e) => {
                tracing::warn!(error = %e, "Job feed unavailable");
                status.set_text(UNAVAILABLE_TEXT);
                return RenderOutcome::Unavailable;
            }
        };

        table.clear();

        match listing {
            FeedListing::Empty => {
                tracing::info!("Job feed is empty");
                status.set_text(EMPTY_TEXT);
                RenderOutcome::Empty
            }
            FeedListing::Jobs { jobs, meta } => {
                for job in &jobs {
                    table.append_row(job_row(job, &self.locale));
                }
                status.set_text(&render_summary(&meta, jobs.len(), &self.locale));

                tracing::info!(rows = jobs.len(), reported = ?meta.count, "Rendered job feed");
                RenderOutcome::Rendered { rows: jobs.len() }
            }
        }
    }
}
