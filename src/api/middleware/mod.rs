//! HTTP middleware for request processing.
//!
//! Provides caller identity and request tracing.

pub mod identity;
pub mod tracing;
