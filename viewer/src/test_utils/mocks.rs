//! Mock implementations of port traits

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::entities::FeedResponse;
use crate::domain::ports::{FeedSource, JobRow, JobTable, StatusLine};
use crate::error::FeedError;

// ============================================================================
// Mock Feed Source
// ============================================================================

enum Behavior {
    Respond(FeedResponse),
    FailStatus(u16),
    RawBody(String),
    Pending,
}

/// Feed source with a canned outcome that counts how often it is called
pub struct MockFeedSource {
    behavior: Behavior,
    calls: AtomicUsize,
}

impl MockFeedSource {
    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn responding(feed: FeedResponse) -> Self {
        Self::with_behavior(Behavior::Respond(feed))
    }

    /// Fail as if the server answered with `status`
    pub fn failing(status: u16) -> Self {
        Self::with_behavior(Behavior::FailStatus(status))
    }

    /// Run `body` through the real decoder on every call
    pub fn from_body(body: &str) -> Self {
        Self::with_behavior(Behavior::RawBody(body.to_string()))
    }

    /// Never resolve
    pub fn pending() -> Self {
        Self::with_behavior(Behavior::Pending)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FeedSource for MockFeedSource {
    async fn fetch_feed(&self) -> Result<FeedResponse, FeedError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.behavior {
            Behavior::Respond(feed) => Ok(feed.clone()),
            Behavior::FailStatus(status) => Err(FeedError::Api {
                status: *status,
                message: "mock failure".to_string(),
            }),
            Behavior::RawBody(body) => FeedResponse::from_json(body),
            Behavior::Pending => std::future::pending().await,
        }
    }
}

// ============================================================================
// Recording Page Elements
// ============================================================================

/// Status line that keeps every text it was given
#[derive(Debug, Default)]
pub struct RecordingStatus {
    pub history: Vec<String>,
}

impl StatusLine for RecordingStatus {
    fn set_text(&mut self, text: &str) {
        self.history.push(text.to_string());
    }
}

/// Table body that counts clears alongside its rows
#[derive(Debug, Default)]
pub struct RecordingTable {
    pub rows: Vec<JobRow>,
    pub clears: usize,
}

impl JobTable for RecordingTable {
    fn clear(&mut self) {
        self.clears += 1;
        self.rows.clear();
    }

    fn append_row(&mut self, row: JobRow) {
        self.rows.push(row);
    }
}
