//! Per-form submission state machine.
//!
//! DESIGN
//! ======
//! A controller owns one form's values, its field errors, and its
//! [`SubmissionState`]. Submitting is split into two synchronous halves,
//! [`FormController::begin_submit`] and [`FormController::finish`], so a UI
//! can keep the controller inside a reactive signal and await the remote call
//! without holding a borrow across the suspension point.
//!
//! INVARIANTS
//! ==========
//! - `begin_submit` only yields a snapshot when validation returns no errors.
//! - While `Submitting`, further `begin_submit` calls are refused.
//! - `finish` only applies to an in-flight submission; late or duplicate
//!   completions are dropped.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::api::RemoteFailure;
use crate::errors::FormErrors;
use crate::field::Field;
use crate::values::Form;

/// Where the form is in its submit lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

/// Why a submit intent did not produce a request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(FormErrors),

    #[error("a submission is already in flight")]
    InFlight,
}

#[derive(Clone, Debug, Default)]
pub struct FormController<F: Form> {
    values: F,
    errors: FormErrors,
    state: SubmissionState,
    rejected_attempts: u32,
}

impl<F: Form> FormController<F> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &F {
        &self.values
    }

    /// Current value of `field`; fields the form lacks read as empty.
    pub fn value(&self, field: Field) -> &str {
        self.values.value(field).unwrap_or_default()
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, SubmissionState::Submitting)
    }

    /// Global failure message from the last remote call.
    pub fn global_error(&self) -> Option<&str> {
        match &self.state {
            SubmissionState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Success banner text, once the remote call has succeeded.
    pub fn notice(&self) -> Option<&'static str> {
        match self.state {
            SubmissionState::Succeeded => F::SUCCESS_NOTICE,
            _ => None,
        }
    }

    /// Bumped on every submit rejected by validation. UIs key their
    /// failure animation off changes to this value.
    pub fn rejected_attempts(&self) -> u32 {
        self.rejected_attempts
    }

    /// Apply one edit. The field's previous error is cleared optimistically.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if self.values.set(field, value.into()) {
            self.errors.remove(field);
        } else {
            log::debug!("ignoring edit to {} on a form without that field", field.key());
        }
    }

    /// Validate and, if clean, enter `Submitting` and return the snapshot to send.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::InFlight`] while a previous submission is
    /// pending, or [`SubmitError::Invalid`] with every field error (which are
    /// also stored for display).
    pub fn begin_submit(&mut self) -> Result<F, SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::InFlight);
        }

        let errors = self.values.validate();
        if !errors.is_empty() {
            log::debug!("submit blocked by {} field error(s)", errors.len());
            self.errors = errors.clone();
            self.state = SubmissionState::Idle;
            self.rejected_attempts = self.rejected_attempts.wrapping_add(1);
            return Err(SubmitError::Invalid(errors));
        }

        self.errors = FormErrors::new();
        self.state = SubmissionState::Submitting;
        Ok(self.values.clone())
    }

    /// Apply the outcome of the in-flight remote call.
    ///
    /// Returns the success payload, or `None` on failure or when no
    /// submission was in flight. On success the field values are discarded;
    /// on failure they are kept and the global message is set.
    pub fn finish<T>(&mut self, result: Result<T, RemoteFailure>) -> Option<T> {
        if !self.is_submitting() {
            log::warn!("dropping remote completion with no submission in flight");
            return None;
        }

        match result {
            Ok(payload) => {
                self.values = F::default();
                self.errors = FormErrors::new();
                self.state = SubmissionState::Succeeded;
                Some(payload)
            }
            Err(failure) => {
                log::warn!("remote call failed: {failure}");
                self.state = SubmissionState::Failed(failure.display_message(F::FAILURE_FALLBACK));
                None
            }
        }
    }
}
