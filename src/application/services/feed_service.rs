//! Read side: per-user and global post feeds with link previews.

use std::sync::Arc;

use crate::application::enrichment::Enricher;
use crate::domain::entities::{EnrichedPost, User};
use crate::domain::repositories::{PostRepository, UserRepository};
use crate::error::AppError;

/// Message returned when the requested author does not exist.
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";

/// An author together with their enriched posts.
#[derive(Debug, Clone)]
pub struct UserFeed {
    pub user: User,
    pub posts: Vec<EnrichedPost>,
}

/// Service building post listings.
pub struct FeedService {
    user_repository: Arc<dyn UserRepository>,
    post_repository: Arc<dyn PostRepository>,
    enricher: Enricher,
}

impl FeedService {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        post_repository: Arc<dyn PostRepository>,
        enricher: Enricher,
    ) -> Self {
        Self {
            user_repository,
            post_repository,
            enricher,
        }
    }

    /// Returns a user's profile and their posts with link previews.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist; posts are not
    /// queried in that case.
    /// Returns [`AppError::Internal`] on storage or metadata fetch errors.
    pub async fn posts_by_user(&self, user_id: i64) -> Result<UserFeed, AppError> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(USER_NOT_FOUND_MESSAGE))?;

        let posts = self.post_repository.list_by_author(user.id).await?;
        tracing::debug!(user_id = user.id, count = posts.len(), "Enriching user posts");

        let posts = self.enricher.enrich(posts).await?;

        Ok(UserFeed { user, posts })
    }

    /// Returns every post with link previews.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage or metadata fetch errors.
    pub async fn all_posts(&self) -> Result<Vec<EnrichedPost>, AppError> {
        let posts = self.post_repository.list_all().await?;
        tracing::debug!(count = posts.len(), "Enriching all posts");

        self.enricher.enrich(posts).await
    }
}
