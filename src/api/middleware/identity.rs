//! Caller identity supplied by the upstream gateway.
//!
//! Authentication happens before requests reach this service. The gateway
//! forwards the authenticated user id in the [`USER_ID_HEADER`] header; this
//! middleware turns it into an [`AuthUser`] request extension that handlers
//! receive as an extractor.

use axum::{
    extract::{FromRequestParts, Request},
    http::request::Parts,
    middleware::Next,
    response::Response,
};

use crate::error::AppError;

/// Header carrying the authenticated user id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The authenticated caller of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i64,
}

/// Resolves the caller from [`USER_ID_HEADER`].
///
/// # Errors
///
/// Returns `401 Unauthorized` if the header is missing or is not a positive
/// integer.
///
/// # Example
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/posts", get(all_posts_handler))
///     .route_layer(middleware::from_fn(identity::layer));
/// ```
pub async fn layer(mut req: Request, next: Next) -> Result<Response, AppError> {
    let user_id = req
        .headers()
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::unauthorized("Unauthorized"))?;

    req.extensions_mut().insert(AuthUser { user_id });

    Ok(next.run(req).await)
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .copied()
            .ok_or_else(|| AppError::unauthorized("Unauthorized"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http, http::StatusCode, middleware, routing::get};
    use tower::ServiceExt;

    async fn whoami(user: AuthUser) -> String {
        user.user_id.to_string()
    }

    fn app() -> Router {
        Router::new()
            .route("/me", get(whoami))
            .route_layer(middleware::from_fn(layer))
    }

    fn request(user_id: Option<&str>) -> Request {
        let mut builder = http::Request::builder().uri("/me");
        if let Some(id) = user_id {
            builder = builder.header(USER_ID_HEADER, id);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_valid_header_reaches_handler() {
        let response = app().oneshot(request(Some("42"))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_header_is_unauthorized() {
        let response = app().oneshot(request(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_malformed_header_is_unauthorized() {
        for bad in ["abc", "-3", "0"] {
            let response = app().oneshot(request(Some(bad))).await.unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[tokio::test]
    async fn test_extractor_without_layer_is_unauthorized() {
        let app = Router::new().route("/me", get(whoami));
        let response = app.oneshot(request(Some("42"))).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
