//! HTTP request handlers for API endpoints.

pub mod feed;
pub mod health;
pub mod posts;

pub use feed::{all_posts_handler, user_posts_handler};
pub use health::health_handler;
pub use posts::{
    create_post_handler, delete_post_handler, share_post_handler, update_post_handler,
};
