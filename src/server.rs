//! HTTP server initialization and runtime setup.
//!
//! Builds the collaborators, wires the services and runs the Axum server until
//! a shutdown signal arrives.

use crate::application::enrichment::Enricher;
use crate::application::services::{FeedService, PostService};
use crate::config::Config;
use crate::domain::entities::User;
use crate::infrastructure::memory::MemoryStore;
use crate::infrastructure::metadata::{FetcherSettings, HttpMetadataFetcher};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

#[derive(Deserialize)]
struct SeedUser {
    id: i64,
    username: String,
    picture: String,
}

/// Builds the application state from configuration.
///
/// # Errors
///
/// Returns an error if the seed users file cannot be read or parsed, or the
/// HTTP client cannot be built.
pub fn build_state(config: &Config) -> Result<AppState> {
    let users = match &config.seed_users_file {
        Some(path) => load_seed_users(path)?,
        None => Vec::new(),
    };
    tracing::info!(count = users.len(), "Users loaded");
    let store = Arc::new(MemoryStore::with_users(users));

    let fetcher = HttpMetadataFetcher::new(FetcherSettings {
        timeout: Duration::from_secs(config.metadata_timeout_secs),
        user_agent: config.metadata_user_agent.clone(),
        max_body_bytes: config.metadata_max_body_bytes,
    })
    .context("Failed to build metadata HTTP client")?;

    let enricher = Enricher::new(
        Arc::new(fetcher),
        config.metadata_concurrency,
        config.enrichment_policy,
    );

    let post_service = Arc::new(PostService::new(store.clone(), store.clone()));
    let feed_service = Arc::new(FeedService::new(store.clone(), store, enricher));

    Ok(AppState::new(post_service, feed_service))
}

fn load_seed_users(path: &str) -> Result<Vec<User>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read SEED_USERS_FILE '{path}'"))?;
    let seeds: Vec<SeedUser> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse SEED_USERS_FILE '{path}'"))?;

    Ok(seeds
        .into_iter()
        .map(|s| User::new(s.id, s.username, s.picture))
        .collect())
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if state construction, bind, or the server itself fails.
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
