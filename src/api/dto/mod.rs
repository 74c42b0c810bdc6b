//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs are validated with `validator`. Wire names are camelCase.

pub mod create_post;
pub mod health;
pub mod lenient;
pub mod post;
pub mod update_post;
