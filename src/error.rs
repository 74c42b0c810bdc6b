//! Application error type and its HTTP rendering.
//!
//! Every handler returns `Result<_, AppError>`. Errors are rendered as:
//!
//! ```json
//! { "error": { "code": "validation_error", "message": "...", "details": {} } }
//! ```
//!
//! Internal errors carry diagnostic details that are logged but never sent to
//! the client.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

use crate::utils::validation::collect_messages;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serializable error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug)]
pub enum AppError {
    /// Request body failed validation. `messages` holds every reported failure.
    Validation { messages: Vec<String> },
    Unauthorized { message: String },
    NotFound { message: String },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn validation(messages: Vec<String>) -> Self {
        Self::Validation { messages }
    }

    /// Validation failure with a single message.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Validation {
            messages: vec![message.into()],
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into its client-facing payload.
    pub fn to_error_info(&self) -> ErrorInfo {
        match self {
            AppError::Validation { messages } => ErrorInfo {
                code: "validation_error",
                message: messages
                    .first()
                    .cloned()
                    .unwrap_or_else(|| "Invalid request".to_string()),
                details: json!({ "messages": messages }),
            },
            AppError::Unauthorized { message } => ErrorInfo {
                code: "unauthorized",
                message: message.clone(),
                details: json!({}),
            },
            AppError::NotFound { message } => ErrorInfo {
                code: "not_found",
                message: message.clone(),
                details: json!({}),
            },
            AppError::Internal { message, .. } => ErrorInfo {
                code: "internal_error",
                message: message.clone(),
                details: json!({}),
            },
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation { messages } => write!(f, "validation: {}", messages.join("; ")),
            AppError::Unauthorized { message } => write!(f, "unauthorized: {message}"),
            AppError::NotFound { message } => write!(f, "not found: {message}"),
            AppError::Internal { message, details } => write!(f, "internal: {message} {details}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::validation(collect_messages(&errors))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal { message, details } = &self {
            tracing::error!(%message, %details, "Request failed");
        }

        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::invalid("bad").status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::unauthorized("no").status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AppError::not_found("gone").status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::internal("boom", json!({})).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_info_lists_every_message() {
        let err = AppError::validation(vec!["first".to_string(), "second".to_string()]);
        let info = err.to_error_info();

        assert_eq!(info.code, "validation_error");
        assert_eq!(info.message, "first");
        assert_eq!(info.details["messages"], json!(["first", "second"]));
    }

    #[test]
    fn test_internal_info_hides_details() {
        let err = AppError::internal("Database error", json!({ "sql": "SELECT secret" }));
        let info = err.to_error_info();

        assert_eq!(info.code, "internal_error");
        assert_eq!(info.message, "Database error");
        assert_eq!(info.details, json!({}));
    }
}
