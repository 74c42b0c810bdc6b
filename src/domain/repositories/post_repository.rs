//! Repository trait for post data access.

use crate::domain::entities::{NewPost, Post, PostPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for posts.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::MemoryStore`] - in-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Inserts a post together with its trend tags.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_post: NewPost) -> Result<Post, AppError>;

    /// Finds a post by id regardless of its author.
    async fn find_by_id(&self, post_id: i64) -> Result<Option<Post>, AppError>;

    /// Finds post `post_id` only if `user_id` authored it.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Post))` if the post exists and belongs to the user
    /// - `Ok(None)` otherwise
    async fn find_owned(&self, post_id: i64, user_id: i64) -> Result<Option<Post>, AppError>;

    /// Overwrites the description and trend set of a post.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the post no longer exists or on storage errors.
    async fn update(&self, post_id: i64, patch: PostPatch) -> Result<(), AppError>;

    /// Deletes a post. Cascading to trends and likes is left to storage.
    async fn delete(&self, post_id: i64) -> Result<(), AppError>;

    /// Lists posts authored by a user.
    async fn list_by_author(&self, user_id: i64) -> Result<Vec<Post>, AppError>;

    /// Lists every post.
    async fn list_all(&self) -> Result<Vec<Post>, AppError>;
}
