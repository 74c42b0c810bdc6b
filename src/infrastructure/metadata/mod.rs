//! Link preview fetching.
//!
//! - [`HttpMetadataFetcher`] - downloads pages with `reqwest`
//! - [`html`] - extracts title/description/image from HTML

pub mod html;
pub mod http_fetcher;

pub use http_fetcher::{FetcherSettings, HttpMetadataFetcher, resolve_target};
