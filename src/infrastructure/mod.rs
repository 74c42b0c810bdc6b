//! Infrastructure layer for external integrations.
//!
//! Implements the collaborator traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`metadata`] - Link preview fetching over HTTP (reqwest) and HTML meta extraction
//! - [`memory`] - In-process implementation of the repository traits

pub mod memory;
pub mod metadata;
