//! Job feed entities
//!
//! Shapes of the JSON body served by the jobs feed endpoint. They live for a
//! single render pass and are never stored.
//!
//! Decoding is lenient the way the page is: a null or mistyped display field
//! costs that cell, not the whole feed.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::FeedError;

/// A single job posting as listed by the feed
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct JobEntry {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub source: Option<String>,
    /// ISO-8601 timestamp, kept as received and parsed only for display
    #[serde(default, deserialize_with = "lenient_text")]
    pub first_seen_at: Option<String>,
}

/// Feed metadata block
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FeedMeta {
    /// ISO-8601 timestamp of when the server built the feed
    #[serde(default, deserialize_with = "lenient_text")]
    pub generated_at: Option<String>,
    /// Advisory count reported by the server; not checked against `jobs`
    #[serde(default, deserialize_with = "lenient_count")]
    pub count: Option<i64>,
}

/// Top-level feed response
///
/// A missing `jobs` list reads as an empty feed. `meta` is only looked at
/// when there is something to show; a `null` meta reads as absent and any
/// other non-object meta as an empty block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FeedResponse {
    #[serde(default)]
    pub jobs: Option<Vec<JobEntry>>,
    #[serde(default, deserialize_with = "lenient_meta")]
    pub meta: Option<FeedMeta>,
}

/// What a decoded feed means for the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedListing {
    Empty,
    Jobs { jobs: Vec<JobEntry>, meta: FeedMeta },
}

impl FeedResponse {
    /// Parse a raw response body.
    ///
    /// A `null` body is an error. Any other non-object JSON value has no
    /// `jobs` and reads as an empty feed.
    pub fn from_json(body: &str) -> Result<Self, FeedError> {
        match serde_json::from_str::<Value>(body)? {
            Value::Null => Err(FeedError::Deserialization(
                "feed body is null".to_string(),
            )),
            value @ Value::Object(_) => Ok(serde_json::from_value(value)?),
            _ => Ok(Self::default()),
        }
    }

    /// Classify the response before anything on the page is touched.
    ///
    /// Jobs without any meta block cannot produce a summary line, so that
    /// case is a failure rather than a partial render. An empty or partial
    /// meta block is fine.
    pub fn into_listing(self) -> Result<FeedListing, FeedError> {
        match self.jobs {
            None => Ok(FeedListing::Empty),
            Some(jobs) if jobs.is_empty() => Ok(FeedListing::Empty),
            Some(jobs) => {
                let meta = self.meta.ok_or(FeedError::MissingMeta)?;
                Ok(FeedListing::Jobs { jobs, meta })
            }
        }
    }
}

/// Strings pass through, numbers and booleans are stringified, anything
/// else (null, arrays, objects) is dropped.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// Integral numbers and numeric strings; anything else is dropped
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_meta<'de, D>(deserializer: D) -> Result<Option<FeedMeta>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        value @ Value::Object(_) => serde_json::from_value(value)
            .map(Some)
            .map_err(D::Error::custom),
        _ => Ok(Some(FeedMeta::default())),
    }
}
