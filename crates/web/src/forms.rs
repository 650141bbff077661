//! Form payloads and field-level validation.
//!
//! Forms arrive as `application/x-www-form-urlencoded` bodies. Every field is
//! deserialized as a string (what the browser actually sends) so a failed
//! submission can be re-rendered with the user's input intact. Cross-record
//! checks (does the selected project exist?) live in the handlers, which
//! push messages into the same error struct.

use std::borrow::Cow;

use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

/// Error message for a missing required field (matches what browsers show
/// for `required` inputs on the server side).
pub const REQUIRED: &str = "This field is required.";

/// Error message for a reference to a record that does not exist.
pub const INVALID_CHOICE: &str = "Select a valid choice.";

/// Required-field check: the value must be non-empty after trimming, so
/// whitespace-only input is rejected the same way empty input is.
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required").with_message(Cow::Borrowed(REQUIRED)));
    }
    Ok(())
}

/// Task create/update form: `{project_id, description}`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct TaskForm {
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    #[validate(custom(function = not_blank))]
    pub description: String,
}

/// Per-field error messages for [`TaskForm`].
#[derive(Debug, Clone, Default)]
pub struct TaskFormErrors {
    pub project_id: Vec<String>,
    pub description: Vec<String>,
}

impl TaskFormErrors {
    pub fn is_empty(&self) -> bool {
        self.project_id.is_empty() && self.description.is_empty()
    }

    /// Collect derive-level validation messages into per-field lists.
    pub fn from_validation(errors: &ValidationErrors) -> Self {
        Self {
            project_id: field_messages(errors, "project_id"),
            description: field_messages(errors, "description"),
        }
    }
}

/// Project create form: `{name}`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ProjectForm {
    #[serde(default)]
    #[validate(custom(function = not_blank))]
    pub name: String,
}

/// Per-field error messages for [`ProjectForm`].
#[derive(Debug, Clone, Default)]
pub struct ProjectFormErrors {
    pub name: Vec<String>,
}

impl ProjectFormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }

    pub fn from_validation(errors: &ValidationErrors) -> Self {
        Self {
            name: field_messages(errors, "name"),
        }
    }
}

fn field_messages(errors: &ValidationErrors, field: &'static str) -> Vec<String> {
    errors
        .field_errors()
        .get(field)
        .map(|errs| {
            errs.iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| REQUIRED.to_string())
                })
                .collect()
        })
        .unwrap_or_default()
}
