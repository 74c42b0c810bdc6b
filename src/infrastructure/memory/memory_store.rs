//! In-memory implementation of the repository traits.
//!
//! Posts are kept in id order; listings return newest first. Trends live on
//! the post record, so deleting a post drops its trend links with it.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use tokio::sync::RwLock;

use crate::domain::entities::{NewPost, Post, PostPatch, User};
use crate::domain::repositories::{PostRepository, TrendRepository, UserRepository};
use crate::error::AppError;

#[derive(Default)]
struct Inner {
    users: HashMap<i64, User>,
    posts: BTreeMap<i64, Post>,
    last_post_id: i64,
}

/// Thread-safe store implementing [`UserRepository`], [`PostRepository`]
/// and [`TrendRepository`].
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with users.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users = users.into_iter().map(|u| (u.id, u)).collect();
        Self {
            inner: RwLock::new(Inner {
                users,
                ..Default::default()
            }),
        }
    }

    /// Number of stored posts.
    pub async fn post_count(&self) -> usize {
        self.inner.read().await.posts.len()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, user_id: i64) -> Result<Option<User>, AppError> {
        Ok(self.inner.read().await.users.get(&user_id).cloned())
    }
}

#[async_trait]
impl PostRepository for MemoryStore {
    async fn create(&self, new_post: NewPost) -> Result<Post, AppError> {
        let mut inner = self.inner.write().await;
        inner.last_post_id += 1;

        let post = Post {
            id: inner.last_post_id,
            author_user_id: new_post.author_user_id,
            link: new_post.link,
            description: new_post.description,
            trends: new_post.trends,
            shared_from_post_id: new_post.shared_from_post_id,
            created_at: Utc::now(),
        };
        inner.posts.insert(post.id, post.clone());

        Ok(post)
    }

    async fn find_by_id(&self, post_id: i64) -> Result<Option<Post>, AppError> {
        Ok(self.inner.read().await.posts.get(&post_id).cloned())
    }

    async fn find_owned(&self, post_id: i64, user_id: i64) -> Result<Option<Post>, AppError> {
        Ok(self
            .inner
            .read()
            .await
            .posts
            .get(&post_id)
            .filter(|p| p.is_owned_by(user_id))
            .cloned())
    }

    async fn update(&self, post_id: i64, patch: PostPatch) -> Result<(), AppError> {
        let mut inner = self.inner.write().await;
        let post = inner.posts.get_mut(&post_id).ok_or_else(|| {
            AppError::internal("Post vanished before update", json!({ "post_id": post_id }))
        })?;

        post.description = patch.description;
        post.trends = patch.trends;
        Ok(())
    }

    async fn delete(&self, post_id: i64) -> Result<(), AppError> {
        self.inner.write().await.posts.remove(&post_id);
        Ok(())
    }

    async fn list_by_author(&self, user_id: i64) -> Result<Vec<Post>, AppError> {
        Ok(self
            .inner
            .read()
            .await
            .posts
            .values()
            .rev()
            .filter(|p| p.is_owned_by(user_id))
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<Post>, AppError> {
        Ok(self.inner.read().await.posts.values().rev().cloned().collect())
    }
}

#[async_trait]
impl TrendRepository for MemoryStore {
    async fn names_for_post(&self, post_id: i64) -> Result<Vec<String>, AppError> {
        Ok(self
            .inner
            .read()
            .await
            .posts
            .get(&post_id)
            .map(|p| p.trends.clone())
            .unwrap_or_default())
    }
}
