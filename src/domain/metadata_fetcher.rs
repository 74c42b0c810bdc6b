//! Link preview collaborator.
//!
//! The fetcher downloads a linked page and extracts its title, description and
//! preview image. The HTTP implementation lives in
//! [`crate::infrastructure::metadata`].

use async_trait::async_trait;

use crate::domain::entities::LinkMetadata;

/// Errors raised while fetching link metadata.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Invalid link: {0}")]
    InvalidUrl(String),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetadataFetcher: Send + Sync {
    /// Fetches `url` and extracts its preview metadata.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the link cannot be parsed or fetched.
    async fn fetch(&self, url: &str) -> Result<LinkMetadata, FetchError>;
}
