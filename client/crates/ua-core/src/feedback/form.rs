//! Inline feedback for the create and edit forms.

use crate::validation::{
    MAX_EMAIL_LENGTH, MAX_NAME_LENGTH, MAX_PHONE_LENGTH, format_name, format_phone,
    validate_draft, validate_email, validate_name, validate_phone,
};
use crate::{DraftField, ErrorSlot, FieldErrors, UserDraft};

pub const INVALID_NAME_MESSAGE: &str = "Invalid name.";
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid e-mail address.";
pub const INVALID_PHONE_MESSAGE: &str = "Invalid phone number.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

pub fn validate_field(field: DraftField, value: Option<&str>) -> bool {
    match field {
        DraftField::Name => validate_name(value),
        DraftField::Email => validate_email(value),
        DraftField::Phone => validate_phone(value),
    }
}

pub fn invalid_message(field: DraftField) -> &'static str {
    match field {
        DraftField::Name => INVALID_NAME_MESSAGE,
        DraftField::Email => INVALID_EMAIL_MESSAGE,
        DraftField::Phone => INVALID_PHONE_MESSAGE,
    }
}

pub fn max_length(field: DraftField) -> usize {
    match field {
        DraftField::Name => MAX_NAME_LENGTH,
        DraftField::Email => MAX_EMAIL_LENGTH,
        DraftField::Phone => MAX_PHONE_LENGTH,
    }
}

/// Normalize typed input the way the form inputs do: strip disallowed
/// characters, then cut to the field's maximum length.
pub fn normalize_input(field: DraftField, value: &str) -> String {
    let formatted = match field {
        DraftField::Name => format_name(Some(value)),
        DraftField::Phone => format_phone(Some(value)),
        DraftField::Email => value.to_string(),
    };
    formatted.chars().take(max_length(field)).collect()
}

/// Error text to show under a field, if any.
///
/// The create form stays quiet on a field the user has not typed into yet;
/// the edit form always reports invalid values. A valid field shows the
/// server error for that field, if one is stored.
pub fn field_feedback<'a>(
    mode: FormMode,
    draft: &UserDraft,
    errors: &'a FieldErrors,
    field: DraftField,
) -> Option<&'a str> {
    let value = draft.field(field);

    if mode == FormMode::Create && value == Some("") {
        return None;
    }

    if !validate_field(field, value) {
        return Some(invalid_message(field));
    }

    errors.get(ErrorSlot::Field(field))
}

pub fn submit_enabled(draft: &UserDraft) -> bool {
    validate_draft(draft)
}
