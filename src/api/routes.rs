//! API route configuration.
//!
//! Every route requires a caller identity via
//! [`crate::api::middleware::identity`].

use crate::api::handlers::{
    all_posts_handler, create_post_handler, delete_post_handler, share_post_handler,
    update_post_handler, user_posts_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch, post},
};

/// Post routes.
///
/// # Endpoints
///
/// - `GET    /posts`                  - All posts with link previews
/// - `POST   /posts`                  - Create a post
/// - `PATCH  /posts/{post_id}`        - Replace description and trends
/// - `DELETE /posts/{post_id}`        - Delete a post
/// - `POST   /posts/{post_id}/share`  - Re-post a post
/// - `GET    /users/{id}/posts`       - A user's posts with link previews
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(all_posts_handler).post(create_post_handler))
        .route(
            "/posts/{post_id}",
            patch(update_post_handler).delete(delete_post_handler),
        )
        .route("/posts/{post_id}/share", post(share_post_handler))
        .route("/users/{id}/posts", get(user_posts_handler))
}
