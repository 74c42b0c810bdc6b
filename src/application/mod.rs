//! Application layer services implementing the post flows.
//!
//! Services consume the repository and fetcher traits and expose the
//! operations HTTP handlers call.
//!
//! # Available Services
//!
//! - [`services::post_service::PostService`] - Create, update, delete and share posts
//! - [`services::feed_service::FeedService`] - Per-user and global feeds with link previews
//! - [`enrichment::Enricher`] - Bounded, order-preserving link preview fan-out

pub mod enrichment;
pub mod services;
