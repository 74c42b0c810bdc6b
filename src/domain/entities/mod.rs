//! Core domain entities for the posts feature.
//!
//! # Entity Types
//!
//! - [`Post`] - A user-authored link with a description and trend tags
//! - [`User`] - Author profile data shown next to a user's posts
//! - [`LinkMetadata`] - Preview data scraped from a post's link
//! - [`EnrichedPost`] - A post paired with its link preview, built at read time
//!
//! # Design Pattern
//!
//! Creation and mutation use separate input structs:
//! - `NewPost` - For inserting posts (including shares)
//! - `PostPatch` - For overwriting description and trends

pub mod link_metadata;
pub mod post;
pub mod user;

pub use link_metadata::{EnrichedPost, LinkMetadata};
pub use post::{NewPost, Post, PostPatch, normalize_trends};
pub use user::User;
