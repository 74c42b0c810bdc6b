mod common;

use axum::http::StatusCode;
use common::{ANA, BRUNO, StubFetcher};
use posts_service::api::middleware::identity::USER_ID_HEADER;
use posts_service::application::enrichment::EnrichmentPolicy;
use serde_json::Value;
use std::sync::Arc;

// ─── GET /posts ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_all_posts_enriched() {
    let store = common::create_test_store();
    common::create_test_post(&store, ANA, "https://a.com", "first", &["rust"]).await;
    common::create_test_post(&store, BRUNO, "https://b.com", "second", &[]).await;
    common::create_test_post(&store, ANA, "https://c.com", "third", &[]).await;

    let fetcher = Arc::new(StubFetcher::default());
    let server = common::make_server_with(store, fetcher.clone(), EnrichmentPolicy::FailAll);

    let response = server.get("/posts").add_header(USER_ID_HEADER, "1").await;

    response.assert_status_ok();

    let posts = response.json::<Vec<Value>>();
    assert_eq!(posts.len(), 3);
    assert_eq!(fetcher.call_count(), 3);

    for post in &posts {
        assert!(post.get("linkTitle").is_some());
        assert!(post.get("linkDescription").is_some());
        assert!(post.get("linkImage").is_some());
    }

    assert_eq!(posts[0]["link"], "https://c.com");
    assert_eq!(posts[0]["linkTitle"], "Title of https://c.com");
    assert_eq!(posts[2]["trends"], serde_json::json!(["rust"]));
}

#[tokio::test]
async fn test_all_posts_empty() {
    let server = common::make_server(common::create_test_store());

    let response = server.get("/posts").add_header(USER_ID_HEADER, "1").await;

    response.assert_status_ok();
    assert!(response.json::<Vec<Value>>().is_empty());
}

#[tokio::test]
async fn test_all_posts_fails_when_one_preview_fails() {
    let store = common::create_test_store();
    common::create_test_post(&store, ANA, "https://a.com", "ok", &[]).await;
    common::create_test_post(&store, ANA, "https://unreachable.example", "down", &[]).await;

    let server = common::make_server(store);

    let response = server.get("/posts").add_header(USER_ID_HEADER, "1").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "internal_error");
}

#[tokio::test]
async fn test_all_posts_fail_soft_keeps_batch() {
    let store = common::create_test_store();
    common::create_test_post(&store, ANA, "https://a.com", "ok", &[]).await;
    common::create_test_post(&store, ANA, "https://unreachable.example", "down", &[]).await;

    let server = common::make_server_with(
        store,
        Arc::new(StubFetcher::default()),
        EnrichmentPolicy::FailSoft,
    );

    let response = server.get("/posts").add_header(USER_ID_HEADER, "1").await;

    response.assert_status_ok();

    let posts = response.json::<Vec<Value>>();
    assert_eq!(posts.len(), 2);
    assert!(posts[0]["linkTitle"].is_null());
    assert_eq!(posts[1]["linkTitle"], "Title of https://a.com");
}

#[tokio::test]
async fn test_all_posts_requires_identity() {
    let server = common::make_server(common::create_test_store());

    server.get("/posts").await.assert_status_unauthorized();
}

// ─── GET /users/{id}/posts ───────────────────────────────────────────────────

#[tokio::test]
async fn test_user_posts_success() {
    let store = common::create_test_store();
    common::create_test_post(&store, ANA, "https://a.com", "by ana", &[]).await;
    common::create_test_post(&store, BRUNO, "https://b.com", "by bruno", &[]).await;

    let server = common::make_server(store);

    let response = server
        .get("/users/2/posts")
        .add_header(USER_ID_HEADER, "1")
        .await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["user"]["username"], "bruno");
    assert_eq!(body["user"]["picture"], "https://pics.example.com/bruno.png");

    let posts = body["posts"].as_array().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["description"], "by bruno");
    assert_eq!(posts[0]["authorUserId"], BRUNO);
    assert_eq!(posts[0]["linkImage"], "https://b.com/cover.png");
}

#[tokio::test]
async fn test_user_posts_unknown_user() {
    let store = common::create_test_store();
    common::create_test_post(&store, ANA, "https://a.com", "by ana", &[]).await;

    let fetcher = Arc::new(StubFetcher::default());
    let server = common::make_server_with(store, fetcher.clone(), EnrichmentPolicy::FailAll);

    let response = server
        .get("/users/404/posts")
        .add_header(USER_ID_HEADER, "1")
        .await;

    response.assert_status_not_found();

    let body = response.json::<Value>();
    assert_eq!(body["error"]["message"], "User not found");
    assert_eq!(fetcher.call_count(), 0);
}

#[tokio::test]
async fn test_user_posts_non_numeric_id() {
    let fetcher = Arc::new(StubFetcher::default());
    let server = common::make_server_with(
        common::create_test_store(),
        fetcher.clone(),
        EnrichmentPolicy::FailAll,
    );

    let response = server
        .get("/users/ana/posts")
        .add_header(USER_ID_HEADER, "1")
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(fetcher.call_count(), 0);
}
