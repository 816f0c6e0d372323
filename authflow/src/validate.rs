//! Client-side validation rules for the auth forms.
//!
//! Rules run in field order and each field gets at most one message. The
//! functions are pure so the controller can re-run them on every submit.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::errors::FormErrors;
use crate::field::Field;
use crate::values::{LoginFormValues, SignupFormValues};

/// Counted in UTF-16 code units, matching browser `String.length`.
pub const MIN_PASSWORD_LEN: usize = 6;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Email is invalid";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
pub const PASSWORDS_MISMATCH: &str = "Passwords do not match";

// Unanchored: any `x@y.z` run inside the input matches.
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is a valid regex"));

/// Whether `email` has a basic `local@domain.tld` shape.
pub fn is_email_shaped(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// Validate the signup form.
pub fn signup(values: &SignupFormValues) -> FormErrors {
    let mut errors = FormErrors::new();

    if values.name.trim().is_empty() {
        errors.insert(Field::Name, NAME_REQUIRED);
    }

    check_email(&values.email, &mut errors);

    if values.password.is_empty() {
        errors.insert(Field::Password, PASSWORD_REQUIRED);
    } else if values.password.encode_utf16().count() < MIN_PASSWORD_LEN {
        errors.insert(Field::Password, PASSWORD_TOO_SHORT);
    }

    if values.password != values.confirm_password {
        errors.insert(Field::ConfirmPassword, PASSWORDS_MISMATCH);
    }

    errors
}

/// Validate the login form. No length rule applies to the password here.
pub fn login(values: &LoginFormValues) -> FormErrors {
    let mut errors = FormErrors::new();

    check_email(&values.email, &mut errors);

    if values.password.is_empty() {
        errors.insert(Field::Password, PASSWORD_REQUIRED);
    }

    errors
}

fn check_email(email: &str, errors: &mut FormErrors) {
    if email.trim().is_empty() {
        errors.insert(Field::Email, EMAIL_REQUIRED);
    } else if !is_email_shaped(email) {
        errors.insert(Field::Email, EMAIL_INVALID);
    }
}
