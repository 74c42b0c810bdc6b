#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use posts_service::application::enrichment::{Enricher, EnrichmentPolicy};
use posts_service::application::services::{FeedService, PostService};
use posts_service::domain::entities::{LinkMetadata, NewPost, Post, User};
use posts_service::domain::metadata_fetcher::{FetchError, MetadataFetcher};
use posts_service::domain::repositories::PostRepository;
use posts_service::infrastructure::memory::MemoryStore;
use posts_service::routes::api_router;
use posts_service::state::AppState;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const ANA: i64 = 1;
pub const BRUNO: i64 = 2;

/// Serves canned previews; links containing `unreachable` fail.
#[derive(Default)]
pub struct StubFetcher {
    pub calls: AtomicUsize,
}

impl StubFetcher {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MetadataFetcher for StubFetcher {
    async fn fetch(&self, url: &str) -> Result<LinkMetadata, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if url.contains("unreachable") {
            return Err(FetchError::Request(format!("connection refused: {url}")));
        }

        Ok(LinkMetadata {
            title: Some(format!("Title of {url}")),
            description: Some(format!("Description of {url}")),
            image: Some(format!("{url}/cover.png")),
        })
    }
}

pub fn create_test_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::with_users([
        User::new(ANA, "ana", "https://pics.example.com/ana.png"),
        User::new(BRUNO, "bruno", "https://pics.example.com/bruno.png"),
    ]))
}

pub fn create_test_state(
    store: Arc<MemoryStore>,
    fetcher: Arc<StubFetcher>,
    policy: EnrichmentPolicy,
) -> AppState {
    let enricher = Enricher::new(fetcher, 4, policy);

    let post_service = Arc::new(PostService::new(store.clone(), store.clone()));
    let feed_service = Arc::new(FeedService::new(store.clone(), store, enricher));

    AppState::new(post_service, feed_service)
}

pub fn make_server(store: Arc<MemoryStore>) -> TestServer {
    make_server_with(store, Arc::new(StubFetcher::default()), EnrichmentPolicy::FailAll)
}

pub fn make_server_with(
    store: Arc<MemoryStore>,
    fetcher: Arc<StubFetcher>,
    policy: EnrichmentPolicy,
) -> TestServer {
    let state = create_test_state(store, fetcher, policy);
    TestServer::new(api_router(state)).unwrap()
}

pub async fn create_test_post(
    store: &MemoryStore,
    author: i64,
    link: &str,
    description: &str,
    trends: &[&str],
) -> Post {
    PostRepository::create(
        store,
        NewPost {
            author_user_id: author,
            link: link.to_string(),
            description: description.to_string(),
            trends: trends.iter().map(|t| t.to_string()).collect(),
            shared_from_post_id: None,
        },
    )
    .await
    .unwrap()
}

pub async fn get_post(store: &MemoryStore, post_id: i64) -> Option<Post> {
    PostRepository::find_by_id(store, post_id).await.unwrap()
}
