//! User entity. Read-only in this service.

/// Public profile of a post author.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub picture: String,
}

impl User {
    pub fn new(id: i64, username: impl Into<String>, picture: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            picture: picture.into(),
        }
    }
}
