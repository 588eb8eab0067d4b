//! HTTP adapter for the job feed endpoint

mod client;

pub use client::FeedClient;
