//! Username rules for generated accounts.
//!
//! Generated usernames double as the local part of the sample email
//! addresses, so they are restricted to a small URL-safe alphabet.
//!
//! # Validation Rules
//!
//! - Length between [`USERNAME_MIN`] and [`USERNAME_MAX`] characters
//! - Lowercase ASCII letters, digits and underscores only
//! - Must start with a letter

/// Minimum allowed length for a generated username.
pub const USERNAME_MIN: usize = 3;

/// Maximum allowed length for a generated username.
pub const USERNAME_MAX: usize = 32;

/// Validates a generated username.
///
/// # Examples
///
/// ```
/// use sample_data::is_valid_username;
///
/// assert!(is_valid_username("ada_lovelace"));
/// assert!(is_valid_username("grace42"));
/// assert!(!is_valid_username("ab"));
/// assert!(!is_valid_username("Ada"));
/// assert!(!is_valid_username("1ada"));
/// ```
#[must_use]
pub fn is_valid_username(name: &str) -> bool {
    let length = name.chars().count();
    if !(USERNAME_MIN..=USERNAME_MAX).contains(&length) {
        return false;
    }
    let starts_with_letter = name.chars().next().is_some_and(|c| c.is_ascii_lowercase());
    starts_with_letter && name.chars().all(is_valid_username_char)
}

const fn is_valid_username_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'
}

/// Lowercases a raw name and replaces disallowed characters with underscores.
///
/// Runs of replaced characters collapse into a single underscore. Length is
/// not enforced.
#[must_use]
pub(crate) fn sanitize_username(raw: &str) -> String {
    let mut sanitized = String::with_capacity(raw.len());
    for c in raw.chars().map(|c| c.to_ascii_lowercase()) {
        if is_valid_username_char(c) {
            sanitized.push(c);
        } else if !sanitized.ends_with('_') {
            sanitized.push('_');
        }
    }
    sanitized.trim_matches('_').to_owned()
}
