//! Feed source port trait

use async_trait::async_trait;

use crate::domain::entities::FeedResponse;
use crate::error::FeedError;

/// Port trait for retrieving the job feed
///
/// One call is one request. Implementations must not retry.
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch_feed(&self) -> Result<FeedResponse, FeedError>;
}
