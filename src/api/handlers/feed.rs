//! Handlers for post listings with link previews.

use axum::{Json, extract::State};

use crate::api::dto::post::{PostResponse, UserPostsResponse};
use crate::api::extract::AppPath;
use crate::api::middleware::identity::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every post with its link preview.
///
/// # Endpoint
///
/// `GET /posts`
///
/// # Errors
///
/// Returns 500 if storage fails or, under the `fail_all` enrichment policy,
/// if any link preview cannot be fetched.
pub async fn all_posts_handler(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<Json<Vec<PostResponse>>, AppError> {
    let posts = state.feed_service.all_posts().await?;

    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

/// Lists a user's posts with link previews.
///
/// # Endpoint
///
/// `GET /users/{id}/posts`
///
/// # Response
///
/// ```json
/// {
///   "user": { "username": "ana", "picture": "https://..." },
///   "posts": [
///     { "id": 3, "link": "https://...", "linkTitle": "...", "linkDescription": "...", "linkImage": "..." }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 404 `User not found` for an unknown user, 500 on storage or
/// preview failures.
pub async fn user_posts_handler(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    _user: AuthUser,
) -> Result<Json<UserPostsResponse>, AppError> {
    let feed = state.feed_service.posts_by_user(id).await?;

    Ok(Json(feed.into()))
}
