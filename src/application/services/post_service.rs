//! Post creation, mutation and sharing.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{NewPost, Post, PostPatch, normalize_trends};
use crate::domain::repositories::{PostRepository, TrendRepository};
use crate::error::AppError;
use crate::utils::url_shape::{INVALID_URL_MESSAGE, is_url_shaped};

/// Message returned when a user touches a post they did not author.
pub const NOT_OWNER_MESSAGE: &str = "Post not made by user";

/// Identifies the post a request targets and the user making it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostContext {
    pub post_id: i64,
    pub user_id: i64,
}

/// Validated input for a new post.
#[derive(Debug, Clone)]
pub struct CreatePost {
    pub link: String,
    pub description: String,
    pub trends: Vec<String>,
}

/// Service for writing posts.
///
/// Update and delete are guarded by an ownership check: only the author of a
/// post may change it.
pub struct PostService {
    post_repository: Arc<dyn PostRepository>,
    trend_repository: Arc<dyn TrendRepository>,
}

impl PostService {
    /// Creates a new post service.
    pub fn new(
        post_repository: Arc<dyn PostRepository>,
        trend_repository: Arc<dyn TrendRepository>,
    ) -> Self {
        Self {
            post_repository,
            trend_repository,
        }
    }

    /// Creates a post owned by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with [`INVALID_URL_MESSAGE`] if the link
    /// does not look like a URL.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create_post(&self, user_id: i64, input: CreatePost) -> Result<Post, AppError> {
        if !is_url_shaped(&input.link) {
            return Err(AppError::invalid(INVALID_URL_MESSAGE));
        }

        let post = self
            .post_repository
            .create(NewPost {
                author_user_id: user_id,
                link: input.link,
                description: input.description,
                trends: normalize_trends(input.trends),
                shared_from_post_id: None,
            })
            .await?;

        tracing::info!(post_id = post.id, user_id, "Post created");
        Ok(post)
    }

    /// Replaces the description and trends of a post owned by the requester.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the requester does not own the post
    /// (including when the post does not exist).
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn update_post(&self, ctx: PostContext, patch: PostPatch) -> Result<(), AppError> {
        let owned = self.owned_post(ctx).await?;

        let patch = PostPatch {
            description: patch.description,
            trends: normalize_trends(patch.trends),
        };
        self.post_repository.update(owned.id, patch).await?;

        tracing::info!(post_id = owned.id, user_id = ctx.user_id, "Post updated");
        Ok(())
    }

    /// Deletes a post owned by the requester.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the requester does not own the post.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn delete_post(&self, ctx: PostContext) -> Result<(), AppError> {
        let owned = self.owned_post(ctx).await?;

        self.post_repository.delete(owned.id).await?;

        tracing::info!(post_id = owned.id, user_id = ctx.user_id, "Post deleted");
        Ok(())
    }

    /// Re-posts `ctx.post_id` on behalf of `ctx.user_id`.
    ///
    /// The new post copies the link, description and trend names of the source
    /// and points back to it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the source post does not exist or on
    /// storage errors.
    pub async fn share_post(&self, ctx: PostContext) -> Result<Post, AppError> {
        let source = self
            .post_repository
            .find_by_id(ctx.post_id)
            .await?
            .ok_or_else(|| {
                AppError::internal(
                    "Failed to share post",
                    json!({ "reason": "source post not found", "post_id": ctx.post_id }),
                )
            })?;

        let trends = self.trend_repository.names_for_post(ctx.post_id).await?;

        let shared = self
            .post_repository
            .create(NewPost {
                author_user_id: ctx.user_id,
                link: source.link,
                description: source.description,
                trends,
                shared_from_post_id: Some(ctx.post_id),
            })
            .await?;

        tracing::info!(
            post_id = shared.id,
            source_post_id = ctx.post_id,
            user_id = ctx.user_id,
            "Post shared"
        );
        Ok(shared)
    }

    async fn owned_post(&self, ctx: PostContext) -> Result<Post, AppError> {
        self.post_repository
            .find_owned(ctx.post_id, ctx.user_id)
            .await?
            .ok_or_else(|| AppError::unauthorized(NOT_OWNER_MESSAGE))
    }
}
