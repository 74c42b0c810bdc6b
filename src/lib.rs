//! # Posts Service
//!
//! HTTP handlers for a social "posts" feature built with Axum: create, update,
//! delete and share posts, and list them with link previews scraped from the
//! linked pages.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, repository traits, link preview fetcher trait
//! - **Application Layer** ([`application`]) - Post and feed services, preview enrichment
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP preview fetcher, in-process store
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export SEED_USERS_FILE="users.json"   # Optional
//! cargo run
//! curl -H 'X-User-Id: 1' localhost:3000/posts
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::enrichment::{Enricher, EnrichmentPolicy};
    pub use crate::application::services::{FeedService, PostService};
    pub use crate::domain::entities::{LinkMetadata, NewPost, Post, User};
    pub use crate::domain::metadata_fetcher::{FetchError, MetadataFetcher};
    pub use crate::error::AppError;
    pub use crate::infrastructure::memory::MemoryStore;
    pub use crate::state::AppState;
}
