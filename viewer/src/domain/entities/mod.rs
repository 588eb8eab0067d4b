//! Domain entities

pub mod job;

pub use job::{FeedListing, FeedMeta, FeedResponse, JobEntry};
