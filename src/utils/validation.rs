//! Helpers for turning `validator` reports into client messages.

use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

// Local limits. Clients only see them through 422 messages.

/// Maximum length of a single trend tag.
pub const MAX_TREND_LEN: usize = 50;

/// Maximum length of a post description.
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Collects every field message, ordered by field name.
pub fn collect_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<(String, &Vec<ValidationError>)> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| (field.to_string(), errs))
        .collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter()
                .map(move |err| message_for(&field, err))
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Returns the first message, walking fields in `order`.
///
/// Used where validation must fail fast on the first invalid field.
pub fn first_message(errors: &ValidationErrors, order: &[&str]) -> Option<String> {
    let fields = errors.field_errors();

    order.iter().find_map(|name| {
        fields
            .iter()
            .find(|(field, _)| AsRef::<str>::as_ref(*field) == *name)
            .and_then(|(_, errs)| errs.first())
            .map(|err| message_for(name, err))
    })
}

fn message_for(field: &str, err: &ValidationError) -> String {
    err.message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| format!("\"{field}\" is invalid"))
}

/// Checks every trend tag is non-empty and at most [`MAX_TREND_LEN`] chars.
pub fn validate_trends(trends: &[String]) -> Result<(), ValidationError> {
    let out_of_range = trends.iter().any(|trend| {
        let len = trend.chars().count();
        len == 0 || len > MAX_TREND_LEN
    });

    if out_of_range {
        return Err(ValidationError::new("trend_length").with_message(Cow::Borrowed(
            "each trend must be between 1 and 50 characters",
        )));
    }
    Ok(())
}

/// Checks a description is at most [`MAX_DESCRIPTION_LEN`] chars. Empty is allowed.
pub fn validate_description(text: &str, field: &str) -> Result<(), ValidationError> {
    if text.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::new("length").with_message(Cow::Owned(format!(
            "\"{field}\" length must be less than or equal to {MAX_DESCRIPTION_LEN} characters long"
        ))));
    }
    Ok(())
}
