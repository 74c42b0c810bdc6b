//! Business logic services for the application layer.

pub mod feed_service;
pub mod post_service;

pub use feed_service::{FeedService, UserFeed};
pub use post_service::{CreatePost, PostContext, PostService};
