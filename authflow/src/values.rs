//! Field values for the signup and login forms.
//!
//! Both structs serialize to the exact JSON bodies the auth backend expects,
//! so the controller can hand a snapshot straight to the transport.

#[cfg(test)]
#[path = "values_test.rs"]
mod values_test;

use serde::{Deserialize, Serialize};

use crate::errors::FormErrors;
use crate::field::Field;
use crate::validate;

/// Behavior shared by every form the [`crate::FormController`] can drive.
pub trait Form: Clone + Default + Serialize {
    /// Fields in render order.
    const FIELDS: &'static [Field];

    /// Global message shown when the backend rejects without a `message`.
    const FAILURE_FALLBACK: &'static str;

    /// Global message shown after a successful submission, if any.
    const SUCCESS_NOTICE: Option<&'static str>;

    fn validate(&self) -> FormErrors;

    /// Current value of `field`, or `None` if the form has no such field.
    fn value(&self, field: Field) -> Option<&str>;

    /// Overwrite `field`. Returns `false` if the form has no such field.
    fn set(&mut self, field: Field, value: String) -> bool;
}

/// Values for the account registration form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupFormValues {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl Form for SignupFormValues {
    const FIELDS: &'static [Field] = &[Field::Name, Field::Email, Field::Password, Field::ConfirmPassword];
    const FAILURE_FALLBACK: &'static str = "Signup failed";
    const SUCCESS_NOTICE: Option<&'static str> = Some("Registration successful! Please login to continue.");

    fn validate(&self) -> FormErrors {
        validate::signup(self)
    }

    fn value(&self, field: Field) -> Option<&str> {
        Some(match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        })
    }

    fn set(&mut self, field: Field, value: String) -> bool {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::ConfirmPassword => self.confirm_password = value,
        }
        true
    }
}

/// Values for the credential login form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginFormValues {
    pub email: String,
    pub password: String,
}

impl Form for LoginFormValues {
    const FIELDS: &'static [Field] = &[Field::Email, Field::Password];
    const FAILURE_FALLBACK: &'static str = "Invalid login credentials";
    const SUCCESS_NOTICE: Option<&'static str> = None;

    fn validate(&self) -> FormErrors {
        validate::login(self)
    }

    fn value(&self, field: Field) -> Option<&str> {
        match field {
            Field::Email => Some(&self.email),
            Field::Password => Some(&self.password),
            Field::Name | Field::ConfirmPassword => None,
        }
    }

    fn set(&mut self, field: Field, value: String) -> bool {
        match field {
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::Name | Field::ConfirmPassword => return false,
        }
        true
    }
}
