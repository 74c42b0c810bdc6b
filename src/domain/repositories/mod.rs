//! Repository trait definitions for the domain layer.
//!
//! These traits describe the data-access collaborator the handlers depend on.
//! Storage itself lives outside this service; the in-process
//! `crate::infrastructure::memory::MemoryStore` implements every trait for
//! local runs and HTTP tests.
//!
//! # Available Repositories
//!
//! - [`PostRepository`] - Post CRUD, ownership checks and listings
//! - [`UserRepository`] - Author lookups
//! - [`TrendRepository`] - Trend tags attached to posts
//!
//! Mock implementations are generated via `mockall` for unit tests.

pub mod post_repository;
pub mod trend_repository;
pub mod user_repository;

pub use post_repository::PostRepository;
pub use trend_repository::TrendRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use post_repository::MockPostRepository;
#[cfg(test)]
pub use trend_repository::MockTrendRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
