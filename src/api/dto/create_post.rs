//! DTO for post creation.

use std::borrow::Cow;

use serde::Deserialize;
use validator::{Validate, ValidationError};

use super::lenient::Lenient;
use crate::application::services::CreatePost;
use crate::error::AppError;
use crate::utils::validation::{first_message, validate_description, validate_trends};

/// Field order used when reporting the first validation failure.
const FIELD_ORDER: &[&str] = &["link", "description", "trends"];

/// Request body for `POST /posts`.
///
/// ```json
/// { "link": "https://example.com", "description": "look", "trends": ["rust"] }
/// ```
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(
        required(message = "\"link\" is required"),
        custom(function = "check_link")
    )]
    pub link: Option<Lenient<String>>,

    /// Defaults to an empty description.
    #[validate(custom(function = "check_description"))]
    pub description: Option<Lenient<String>>,

    /// Defaults to no trends.
    #[validate(custom(function = "check_trends"))]
    pub trends: Option<Lenient<Vec<String>>>,
}

fn check_link(value: &Lenient<String>) -> Result<(), ValidationError> {
    if value.as_str("link")?.is_empty() {
        return Err(ValidationError::new("length")
            .with_message(Cow::Borrowed("\"link\" is not allowed to be empty")));
    }
    Ok(())
}

fn check_description(value: &Lenient<String>) -> Result<(), ValidationError> {
    validate_description(value.as_str("description")?, "description")
}

fn check_trends(value: &Lenient<Vec<String>>) -> Result<(), ValidationError> {
    validate_trends(value.as_strings("trends")?)
}

impl CreatePostRequest {
    /// Validates the body, failing on the first invalid field.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with a single message.
    pub fn into_input(self) -> Result<CreatePost, AppError> {
        if let Err(errors) = self.validate() {
            let message = first_message(&errors, FIELD_ORDER)
                .unwrap_or_else(|| "Invalid request body".to_string());
            return Err(AppError::invalid(message));
        }

        Ok(CreatePost {
            link: self.link.and_then(Lenient::into_typed).unwrap_or_default(),
            description: self
                .description
                .and_then(Lenient::into_typed)
                .unwrap_or_default(),
            trends: self.trends.and_then(Lenient::into_typed).unwrap_or_default(),
        })
    }
}
