//! Handlers for post writes: create, update, delete and share.
//!
//! All routes require an [`AuthUser`]. Bodies are validated before any
//! ownership check or storage call.

use axum::{extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::create_post::CreatePostRequest;
use crate::api::dto::update_post::UpdatePostRequest;
use crate::api::extract::{AppJson, AppPath};
use crate::api::middleware::identity::AuthUser;
use crate::application::services::PostContext;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a post owned by the caller.
///
/// # Endpoint
///
/// `POST /posts`
///
/// # Response Codes
///
/// - **201 Created**: post stored
/// - **422 Unprocessable Entity**: first invalid field, or `URL inválida!`
///   when the link does not look like a URL
pub async fn create_post_handler(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(payload): AppJson<CreatePostRequest>,
) -> Result<StatusCode, AppError> {
    let input = payload.into_input()?;

    state.post_service.create_post(user.user_id, input).await?;

    Ok(StatusCode::CREATED)
}

/// Replaces the description and trends of the caller's post.
///
/// # Endpoint
///
/// `PATCH /posts/{post_id}`
///
/// # Response Codes
///
/// - **204 No Content**: post updated
/// - **401 Unauthorized**: `Post not made by user`
/// - **422 Unprocessable Entity**: every invalid field is listed, or the
///   body is not JSON, or `post_id` is not a number
pub async fn update_post_handler(
    State(state): State<AppState>,
    AppPath(post_id): AppPath<i64>,
    user: AuthUser,
    AppJson(payload): AppJson<UpdatePostRequest>,
) -> Result<StatusCode, AppError> {
    payload.validate()?;

    let ctx = PostContext {
        post_id,
        user_id: user.user_id,
    };
    state
        .post_service
        .update_post(ctx, payload.into_patch())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Deletes the caller's post.
///
/// # Endpoint
///
/// `DELETE /posts/{post_id}`
///
/// # Response Codes
///
/// - **202 Accepted**: post deleted
/// - **401 Unauthorized**: `Post not made by user`
pub async fn delete_post_handler(
    State(state): State<AppState>,
    AppPath(post_id): AppPath<i64>,
    user: AuthUser,
) -> Result<StatusCode, AppError> {
    let ctx = PostContext {
        post_id,
        user_id: user.user_id,
    };
    state.post_service.delete_post(ctx).await?;

    Ok(StatusCode::ACCEPTED)
}

/// Re-posts another post on behalf of the caller.
///
/// # Endpoint
///
/// `POST /posts/{post_id}/share`
///
/// # Response Codes
///
/// - **201 Created**: share stored
/// - **500 Internal Server Error**: source post missing or storage failure
pub async fn share_post_handler(
    State(state): State<AppState>,
    AppPath(post_id): AppPath<i64>,
    user: AuthUser,
) -> Result<StatusCode, AppError> {
    let ctx = PostContext {
        post_id,
        user_id: user.user_id,
    };
    state.post_service.share_post(ctx).await?;

    Ok(StatusCode::CREATED)
}
