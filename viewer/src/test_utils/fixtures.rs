//! Test fixtures
//!
//! Factory functions for feed data with sensible defaults.

use crate::domain::entities::{FeedMeta, FeedResponse, JobEntry};

/// A job with the given title and fixed other fields
pub fn test_job(title: &str) -> JobEntry {
    JobEntry {
        title: Some(title.to_string()),
        url: Some(format!(
            "https://jobs.example.com/{}",
            title.to_lowercase().replace(' ', "-")
        )),
        company: Some("Acme".to_string()),
        source: Some("Board".to_string()),
        first_seen_at: Some("2024-01-01T00:00:00Z".to_string()),
    }
}

pub fn test_meta(count: i64) -> FeedMeta {
    FeedMeta {
        generated_at: Some("2024-01-02T00:00:00Z".to_string()),
        count: Some(count),
    }
}

/// A feed with `n` jobs titled "Job 1".."Job n"
pub fn test_feed(n: usize) -> FeedResponse {
    let jobs = (1..=n).map(|i| test_job(&format!("Job {}", i))).collect();
    FeedResponse {
        jobs: Some(jobs),
        meta: Some(test_meta(n as i64)),
    }
}

/// The single-job feed used in the acceptance scenario
pub fn scenario_feed() -> FeedResponse {
    FeedResponse {
        jobs: Some(vec![JobEntry {
            title: Some("Engineer".to_string()),
            url: Some("https://x.com".to_string()),
            company: Some("Acme".to_string()),
            source: Some("Board".to_string()),
            first_seen_at: Some("2024-01-01T00:00:00Z".to_string()),
        }]),
        meta: Some(test_meta(1)),
    }
}
