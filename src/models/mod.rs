// src/models/mod.rs

pub mod question;
pub mod quiz_result;

/// Case-insensitive equality used for categories, difficulties and emails.
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b) || a.to_lowercase() == b.to_lowercase()
}
