//! Input formatting and validation for user drafts.
//!
//! Every function treats `None` as an absent field: formatters return an
//! empty string and validators return `false`.

use crate::UserDraft;

use std::sync::LazyLock;

use regex::Regex;

pub const MIN_NAME_LENGTH: usize = 2;
pub const MAX_NAME_LENGTH: usize = 50;

pub const MIN_EMAIL_LENGTH: usize = 2;
pub const MAX_EMAIL_LENGTH: usize = 75;

pub const MIN_PHONE_LENGTH: usize = 10;
pub const MAX_PHONE_LENGTH: usize = 11;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern"));

/// Letters accepted in names: ASCII plus the Latin-1 accented range,
/// excluding the multiplication and division signs.
fn is_name_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
        || ('\u{C0}'..='\u{D6}').contains(&c)
        || ('\u{D8}'..='\u{F6}').contains(&c)
        || ('\u{F8}'..='\u{FF}').contains(&c)
}

/// Strip everything that is not a name letter or whitespace.
pub fn format_name(value: Option<&str>) -> String {
    value
        .unwrap_or_default()
        .chars()
        .filter(|c| is_name_letter(*c) || c.is_whitespace())
        .collect()
}

/// Strip everything that is not an ASCII digit.
pub fn format_phone(value: Option<&str>) -> String {
    value
        .unwrap_or_default()
        .chars()
        .filter(char::is_ascii_digit)
        .collect()
}

pub fn validate_name(name: Option<&str>) -> bool {
    name.is_some_and(|name| {
        (MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&name.chars().count())
    })
}

/// A phone number has 10 or 11 digits (area code + number). Separators are
/// not counted, so numbers stored formatted by the server still validate.
pub fn validate_phone(phone: Option<&str>) -> bool {
    phone.is_some_and(|phone| {
        let digits = phone.chars().filter(char::is_ascii_digit).count();
        (MIN_PHONE_LENGTH..=MAX_PHONE_LENGTH).contains(&digits)
    })
}

pub fn validate_email(email: Option<&str>) -> bool {
    email.is_some_and(|email| {
        (MIN_EMAIL_LENGTH..=MAX_EMAIL_LENGTH).contains(&email.chars().count())
            && EMAIL_PATTERN.is_match(email)
    })
}

/// Submit gate: name, email and phone must all validate.
pub fn validate_draft(draft: &UserDraft) -> bool {
    validate_name(draft.name.as_deref())
        && validate_email(draft.email.as_deref())
        && validate_phone(draft.phone.as_deref())
}
