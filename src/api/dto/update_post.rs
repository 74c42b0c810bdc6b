//! DTO for post updates.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use super::lenient::Lenient;
use crate::domain::entities::PostPatch;
use crate::utils::validation::{validate_description, validate_trends};

/// Request body for `PATCH /posts/{post_id}`.
///
/// Both fields are required. Every failing field is reported, wrong JSON
/// types included.
///
/// ```json
/// { "newDescription": "edited", "newTrends": ["rust"] }
/// ```
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    #[validate(
        required(message = "\"newDescription\" is required"),
        custom(function = "check_new_description")
    )]
    pub new_description: Option<Lenient<String>>,

    #[validate(
        required(message = "\"newTrends\" is required"),
        custom(function = "check_new_trends")
    )]
    pub new_trends: Option<Lenient<Vec<String>>>,
}

fn check_new_description(value: &Lenient<String>) -> Result<(), ValidationError> {
    validate_description(value.as_str("newDescription")?, "newDescription")
}

fn check_new_trends(value: &Lenient<Vec<String>>) -> Result<(), ValidationError> {
    validate_trends(value.as_strings("newTrends")?)
}

impl UpdatePostRequest {
    /// Converts a validated body into a patch.
    pub fn into_patch(self) -> PostPatch {
        PostPatch {
            description: self
                .new_description
                .and_then(Lenient::into_typed)
                .unwrap_or_default(),
            trends: self
                .new_trends
                .and_then(Lenient::into_typed)
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use serde_json::json;

    #[test]
    fn test_collects_every_failure() {
        let req: UpdatePostRequest = serde_json::from_value(json!({})).unwrap();

        let err: AppError = req.validate().unwrap_err().into();

        match err {
            AppError::Validation { messages } => {
                assert_eq!(messages.len(), 2);
                assert!(messages.contains(&"\"newDescription\" is required".to_string()));
                assert!(messages.contains(&"\"newTrends\" is required".to_string()));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_reports_every_mistyped_field() {
        let req: UpdatePostRequest =
            serde_json::from_value(json!({ "newDescription": 5, "newTrends": "rust" })).unwrap();

        let err: AppError = req.validate().unwrap_err().into();

        match err {
            AppError::Validation { messages } => assert_eq!(
                messages,
                vec![
                    "\"newDescription\" must be a string".to_string(),
                    "\"newTrends\" must be an array".to_string(),
                ]
            ),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_description_too_long() {
        let req: UpdatePostRequest = serde_json::from_value(json!({
            "newDescription": "x".repeat(501),
            "newTrends": []
        }))
        .unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_valid_body_into_patch() {
        let req: UpdatePostRequest = serde_json::from_value(json!({
            "newDescription": "edited",
            "newTrends": ["rust", "axum"]
        }))
        .unwrap();

        assert!(req.validate().is_ok());
        let patch = req.into_patch();
        assert_eq!(patch.description, "edited");
        assert_eq!(patch.trends, vec!["rust", "axum"]);
    }
}
