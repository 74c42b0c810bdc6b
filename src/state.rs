use std::sync::Arc;

use crate::application::services::{FeedService, PostService};

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub post_service: Arc<PostService>,
    pub feed_service: Arc<FeedService>,
}

impl AppState {
    pub fn new(post_service: Arc<PostService>, feed_service: Arc<FeedService>) -> Self {
        Self {
            post_service,
            feed_service,
        }
    }
}
