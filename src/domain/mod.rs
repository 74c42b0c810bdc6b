//! Domain layer containing business entities and collaborator contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures (posts, users, link previews)
//! - [`repositories`] - Data access trait definitions
//! - [`metadata_fetcher`] - Link preview fetcher trait
//!
//! The domain layer does not depend on infrastructure or presentation layers.
//! Business flows live in [`crate::application::services`].

pub mod entities;
pub mod metadata_fetcher;
pub mod repositories;
