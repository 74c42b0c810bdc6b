//! Post entity and its creation/update inputs.

use chrono::{DateTime, Utc};

/// A post linking to an external URL.
///
/// Belongs exclusively to `author_user_id`. A post created by sharing another
/// one keeps a back-reference in `shared_from_post_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: i64,
    pub author_user_id: i64,
    pub link: String,
    pub description: String,
    pub trends: Vec<String>,
    pub shared_from_post_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Returns true if `user_id` authored this post.
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.author_user_id == user_id
    }
}

/// Input data for inserting a post.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub author_user_id: i64,
    pub link: String,
    pub description: String,
    pub trends: Vec<String>,
    pub shared_from_post_id: Option<i64>,
}

/// Replacement description and trend set for an existing post.
#[derive(Debug, Clone, PartialEq)]
pub struct PostPatch {
    pub description: String,
    pub trends: Vec<String>,
}

/// Collapses duplicate trends, keeping the first occurrence of each.
pub fn normalize_trends(trends: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::with_capacity(trends.len());
    trends
        .into_iter()
        .filter(|t| seen.insert(t.clone()))
        .collect()
}
