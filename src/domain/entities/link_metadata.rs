//! Link preview data attached to posts at read time.

use super::Post;

/// Preview metadata extracted from a linked page.
///
/// Every field is optional: pages often omit one or more of them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// A post together with the preview of its link. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedPost {
    pub post: Post,
    pub metadata: LinkMetadata,
}

impl EnrichedPost {
    pub fn new(post: Post, metadata: LinkMetadata) -> Self {
        Self { post, metadata }
    }
}
