//! Repository trait for trend tags.

use crate::error::AppError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrendRepository: Send + Sync {
    /// Returns the trend names attached to a post, in insertion order.
    ///
    /// An unknown post yields an empty list.
    async fn names_for_post(&self, post_id: i64) -> Result<Vec<String>, AppError>;
}
