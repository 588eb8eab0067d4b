//! HTTP feed client implementation

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;

use crate::domain::entities::FeedResponse;
use crate::domain::ports::FeedSource;
use crate::error::FeedError;

/// Fetches the job feed with a single GET. No timeout, no retries.
#[derive(Clone)]
pub struct FeedClient {
    http: Client,
    feed_url: String,
}

impl FeedClient {
    pub fn new(feed_url: &str) -> Result<Self, FeedError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            feed_url: feed_url.to_string(),
        })
    }

    #[cfg(test)]
    pub fn feed_url(&self) -> &str {
        &self.feed_url
    }

    async fn handle_response(&self, response: reqwest::Response) -> Result<FeedResponse, FeedError> {
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(FeedError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        FeedResponse::from_json(&body)
    }
}

#[async_trait]
impl FeedSource for FeedClient {
    async fn fetch_feed(&self) -> Result<FeedResponse, FeedError> {
        tracing::debug!(url = %self.feed_url, "Fetching job feed");

        let response = self.http.get(&self.feed_url).send().await?;
        self.handle_response(response).await
    }
}
