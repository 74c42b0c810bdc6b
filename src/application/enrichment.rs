//! Link preview enrichment for post listings.
//!
//! Metadata for a batch of posts is fetched with at most `concurrency`
//! requests in flight. Output order always matches input order.

use std::str::FromStr;
use std::sync::Arc;

use futures::stream::{self, StreamExt, TryStreamExt};
use serde_json::json;

use crate::domain::entities::{EnrichedPost, LinkMetadata, Post};
use crate::domain::metadata_fetcher::{FetchError, MetadataFetcher};
use crate::error::AppError;

/// What to do when a single link preview cannot be fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnrichmentPolicy {
    /// Abort the whole batch with an internal error.
    #[default]
    FailAll,
    /// Keep the post with empty metadata and log a warning.
    FailSoft,
}

impl FromStr for EnrichmentPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail_all" => Ok(Self::FailAll),
            "fail_soft" => Ok(Self::FailSoft),
            other => Err(format!(
                "expected 'fail_all' or 'fail_soft', got '{other}'"
            )),
        }
    }
}

/// Attaches link previews to posts.
#[derive(Clone)]
pub struct Enricher {
    fetcher: Arc<dyn MetadataFetcher>,
    concurrency: usize,
    policy: EnrichmentPolicy,
}

impl Enricher {
    pub fn new(
        fetcher: Arc<dyn MetadataFetcher>,
        concurrency: usize,
        policy: EnrichmentPolicy,
    ) -> Self {
        Self {
            fetcher,
            concurrency: concurrency.max(1),
            policy,
        }
    }

    /// Fetches metadata for every post.
    ///
    /// # Errors
    ///
    /// Under [`EnrichmentPolicy::FailAll`], returns [`AppError::Internal`] for
    /// the first failed fetch; remaining in-flight fetches are dropped.
    pub async fn enrich(&self, posts: Vec<Post>) -> Result<Vec<EnrichedPost>, AppError> {
        let fetcher = &self.fetcher;
        let fetched = stream::iter(posts)
            .map(|post| async move {
                let outcome = fetcher.fetch(&post.link).await;
                (post, outcome)
            })
            .buffered(self.concurrency);

        match self.policy {
            EnrichmentPolicy::FailAll => {
                fetched
                    .map(|(post, outcome)| match outcome {
                        Ok(metadata) => Ok(EnrichedPost::new(post, metadata)),
                        Err(e) => Err(fetch_failed(&post, e)),
                    })
                    .try_collect()
                    .await
            }
            EnrichmentPolicy::FailSoft => Ok(fetched
                .map(|(post, outcome)| {
                    let metadata = outcome.unwrap_or_else(|e| {
                        tracing::warn!(
                            post_id = post.id,
                            link = %post.link,
                            error = %e,
                            "Link preview unavailable"
                        );
                        LinkMetadata::default()
                    });
                    EnrichedPost::new(post, metadata)
                })
                .collect()
                .await),
        }
    }
}

fn fetch_failed(post: &Post, e: FetchError) -> AppError {
    AppError::internal(
        "Failed to fetch link metadata",
        json!({ "post_id": post.id, "link": post.link, "reason": e.to_string() }),
    )
}
