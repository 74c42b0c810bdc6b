//! Response DTOs for post listings.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::services::UserFeed;
use crate::domain::entities::EnrichedPost;

/// A post with its link preview, as returned by the listing endpoints.
///
/// `linkTitle`, `linkDescription` and `linkImage` are always present and are
/// `null` when the page did not provide them.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: i64,
    pub author_user_id: i64,
    pub link: String,
    pub description: String,
    pub trends: Vec<String>,
    pub shared_from_post_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub link_title: Option<String>,
    pub link_description: Option<String>,
    pub link_image: Option<String>,
}

impl From<EnrichedPost> for PostResponse {
    fn from(enriched: EnrichedPost) -> Self {
        let EnrichedPost { post, metadata } = enriched;
        Self {
            id: post.id,
            author_user_id: post.author_user_id,
            link: post.link,
            description: post.description,
            trends: post.trends,
            shared_from_post_id: post.shared_from_post_id,
            created_at: post.created_at,
            link_title: metadata.title,
            link_description: metadata.description,
            link_image: metadata.image,
        }
    }
}

/// Public author fields shown above a user's posts.
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub username: String,
    pub picture: String,
}

/// Response for `GET /users/{id}/posts`.
#[derive(Debug, Serialize)]
pub struct UserPostsResponse {
    pub user: UserSummary,
    pub posts: Vec<PostResponse>,
}

impl From<UserFeed> for UserPostsResponse {
    fn from(feed: UserFeed) -> Self {
        Self {
            user: UserSummary {
                username: feed.user.username,
                picture: feed.user.picture,
            },
            posts: feed.posts.into_iter().map(PostResponse::from).collect(),
        }
    }
}
