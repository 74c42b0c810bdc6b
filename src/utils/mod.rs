//! Utility functions shared by the API and application layers.
//!
//! - [`url_shape`] - Link shape check applied when a post is created
//! - [`validation`] - Helpers around `validator` error reports

pub mod url_shape;
pub mod validation;
