//! Login field validation rules.
//!
//! # Design
//! - Validators are pure functions of the current value; callers decide when
//!   to re-run them.
//! - Failures are typed; their `Display` is the user-facing message.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Passwords must be strictly longer than six UTF-16 code units.
pub const MIN_PASSWORD_LEN: usize = 7;

const EMAIL_SHAPE_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

// `None` only if the pattern fails to compile; every address is then rejected.
static EMAIL_SHAPE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(EMAIL_SHAPE_PATTERN).ok());

/// Email validation failures, most fundamental first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EmailError {
    /// No value entered.
    #[error("Email is required")]
    Required,
    /// The value has no `@`.
    #[error("Email must include @")]
    MissingAt,
    /// The value has an `@` but is not shaped like `local@domain.tld`.
    #[error("Please enter a valid email address")]
    InvalidFormat,
}

/// Password validation failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PasswordError {
    /// No value entered.
    #[error("Password is required")]
    Required,
    /// Six characters or fewer.
    #[error("Password must be more than 6 characters")]
    TooShort,
}

/// A validation failure for either login field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Email field failure.
    #[error(transparent)]
    Email(#[from] EmailError),
    /// Password field failure.
    #[error(transparent)]
    Password(#[from] PasswordError),
}

/// Validate an email address.
///
/// # Errors
/// Returns [`EmailError::Required`] for an empty value, [`EmailError::MissingAt`]
/// when there is no `@`, and [`EmailError::InvalidFormat`] when the value is not
/// shaped like `local@domain.tld` (no whitespace, a single `@`, a dot inside the
/// domain).
pub fn validate_email(value: &str) -> Result<(), EmailError> {
    if value.is_empty() {
        return Err(EmailError::Required);
    }
    if !value.contains('@') {
        return Err(EmailError::MissingAt);
    }
    let shaped = EMAIL_SHAPE
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(value));
    if shaped {
        Ok(())
    } else {
        Err(EmailError::InvalidFormat)
    }
}

/// Password length as the browser reports it: UTF-16 code units, so a
/// character outside the Basic Multilingual Plane counts twice.
#[must_use]
pub fn password_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Validate a password.
///
/// Length is measured with [`password_len`].
///
/// # Errors
/// Returns [`PasswordError::Required`] for an empty value and
/// [`PasswordError::TooShort`] for values of six code units or fewer.
pub fn validate_password(value: &str) -> Result<(), PasswordError> {
    if value.is_empty() {
        return Err(PasswordError::Required);
    }
    if password_len(value) < MIN_PASSWORD_LEN {
        return Err(PasswordError::TooShort);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_pattern_compiles() {
        assert!(EMAIL_SHAPE.is_some());
    }

    #[test]
    fn email_rules_apply_in_order() {
        assert_eq!(validate_email(""), Err(EmailError::Required));
        assert_eq!(validate_email("bademail"), Err(EmailError::MissingAt));
        assert_eq!(validate_email("user@"), Err(EmailError::InvalidFormat));
        assert_eq!(validate_email("user@host"), Err(EmailError::InvalidFormat));
        assert_eq!(validate_email("us er@host.io"), Err(EmailError::InvalidFormat));
        assert_eq!(validate_email("a@b@c.io"), Err(EmailError::InvalidFormat));
        assert_eq!(validate_email("a@b.c"), Ok(()));
        assert_eq!(validate_email("user@example.com"), Ok(()));
    }

    #[test]
    fn values_without_at_always_report_missing_at() {
        for value in ["x", "plainaddress", "example.com", "   ", "user.name"] {
            assert_eq!(validate_email(value), Err(EmailError::MissingAt), "{value}");
        }
    }

    #[test]
    fn password_length_boundary_is_seven() {
        assert_eq!(validate_password(""), Err(PasswordError::Required));
        for len in 1..=6 {
            let value = "x".repeat(len);
            assert_eq!(validate_password(&value), Err(PasswordError::TooShort));
        }
        assert_eq!(validate_password("1234567"), Ok(()));
        assert_eq!(validate_password("longenough"), Ok(()));
    }

    #[test]
    fn password_length_counts_utf16_units() {
        assert_eq!(validate_password("ééé"), Err(PasswordError::TooShort));
        assert_eq!(validate_password("ééééééé"), Ok(()));
        assert_eq!(password_len("😀😀😀"), 6);
        assert_eq!(validate_password("😀😀😀"), Err(PasswordError::TooShort));
        assert_eq!(validate_password("😀😀😀😀"), Ok(()));
        assert_eq!(validate_password("😀😀😀a"), Ok(()));
    }

    #[test]
    fn messages_match_form_copy() {
        assert_eq!(EmailError::Required.to_string(), "Email is required");
        assert_eq!(EmailError::MissingAt.to_string(), "Email must include @");
        assert_eq!(
            FieldError::from(PasswordError::TooShort).to_string(),
            "Password must be more than 6 characters"
        );
    }
}
