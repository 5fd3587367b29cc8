//! Field validation for create and update payloads
//!
//! Payloads arrive as loosely typed JSON objects. Each rule checks one field
//! and records a [`FieldError`](crate::FieldError) on failure, so a single
//! call reports every offending field rather than stopping at the first.
//!
//! Unknown keys (including a caller supplied `id`) are ignored.

use serde_json::{Map, Value};

use crate::error::ValidationErrors;
use crate::types::{NewUser, UserChanges};

/// Wire name of the email field
pub const EMAIL: &str = "email";
/// Wire name of the first name field
pub const FIRST_NAME: &str = "first_name";
/// Wire name of the last name field
pub const LAST_NAME: &str = "last_name";
/// Wire name of the avatar field
pub const AVATAR: &str = "avatar";

/// Validate a full create payload
///
/// # Errors
///
/// Returns every field that is missing, mistyped, empty or (for `email`)
/// not a well-formed address.
pub fn validate_create(payload: &Map<String, Value>) -> Result<NewUser, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let email = required(payload, EMAIL, &mut errors);
    let first_name = required(payload, FIRST_NAME, &mut errors);
    let last_name = required(payload, LAST_NAME, &mut errors);
    let avatar = match payload.get(AVATAR) {
        Some(value) => avatar_rule(value, &mut errors),
        None => None,
    };

    match (email, first_name, last_name) {
        (Some(email), Some(first_name), Some(last_name)) if errors.is_empty() => Ok(NewUser {
            email,
            first_name,
            last_name,
            avatar,
        }),
        _ => Err(errors),
    }
}

/// Validate a partial update payload
///
/// Only supplied keys are checked; an empty object yields an empty change
/// set. `"avatar": null` clears the avatar.
///
/// # Errors
///
/// Returns every supplied field that fails the same rule used on create.
pub fn validate_update(payload: &Map<String, Value>) -> Result<UserChanges, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let changes = UserChanges {
        email: payload
            .get(EMAIL)
            .and_then(|v| text_rule(EMAIL, v, &mut errors)),
        first_name: payload
            .get(FIRST_NAME)
            .and_then(|v| text_rule(FIRST_NAME, v, &mut errors)),
        last_name: payload
            .get(LAST_NAME)
            .and_then(|v| text_rule(LAST_NAME, v, &mut errors)),
        avatar: payload.get(AVATAR).map(|v| avatar_rule(v, &mut errors)),
    };

    errors.into_result(changes)
}

/// Check an address against `local@label.label` grammar
///
/// The local part is any run of printable non-space characters without `@`.
/// The domain needs at least two dot separated labels of ASCII alphanumerics
/// and hyphens, no label may start or end with a hyphen, and the top level
/// label is at least two characters long.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty()
        || local.len() > 64
        || local.starts_with('.')
        || local.ends_with('.')
        || local.contains("..")
        || !local.chars().all(|c| c.is_ascii_graphic() && c != '@')
    {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || domain.len() > 253 {
        return false;
    }

    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });

    labels_ok && labels.last().is_some_and(|tld| tld.len() >= 2)
}

fn required(
    payload: &Map<String, Value>,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match payload.get(field) {
        Some(value) => text_rule(field, value, errors),
        None => {
            errors.push(field, "field required");
            None
        }
    }
}

/// Rule shared by every required text field; `email` also checks format
fn text_rule(field: &str, value: &Value, errors: &mut ValidationErrors) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim(),
        Value::Null => {
            errors.push(field, "must not be null");
            return None;
        }
        _ => {
            errors.push(field, "must be a string");
            return None;
        }
    };

    if text.is_empty() {
        errors.push(field, "must not be empty");
        return None;
    }

    if field == EMAIL && !is_valid_email(text) {
        errors.push(field, "value is not a valid email address");
        return None;
    }

    Some(text.to_string())
}

fn avatar_rule(value: &Value, errors: &mut ValidationErrors) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        _ => {
            errors.push(AVATAR, "must be a string or null");
            None
        }
    }
}
