use super::*;
use crate::values::{LoginFormValues, SignupFormValues};

fn filled_login() -> FormController<LoginFormValues> {
    let mut form = FormController::new();
    form.set_field(Field::Email, "x@y.com");
    form.set_field(Field::Password, "pw123");
    form
}

// =============================================================
// Idle / editing
// =============================================================

#[test]
fn new_form_is_idle_and_clean() {
    let form = FormController::<SignupFormValues>::new();
    assert_eq!(form.state(), &SubmissionState::Idle);
    assert!(form.errors().is_empty());
    assert_eq!(form.value(Field::Name), "");
    assert_eq!(form.global_error(), None);
    assert_eq!(form.notice(), None);
}

#[test]
fn edit_clears_only_that_fields_error() {
    let mut form = FormController::<SignupFormValues>::new();
    assert!(form.begin_submit().is_err());
    assert!(form.error(Field::Name).is_some());
    assert!(form.error(Field::Email).is_some());

    form.set_field(Field::Name, "A");
    assert_eq!(form.error(Field::Name), None);
    assert!(form.error(Field::Email).is_some());
    assert_eq!(form.value(Field::Name), "A");
}

#[test]
fn edit_to_unknown_field_is_ignored() {
    let mut form = FormController::<LoginFormValues>::new();
    form.set_field(Field::Name, "Ada");
    assert_eq!(form.value(Field::Name), "");
    assert_eq!(form.values(), &LoginFormValues::default());
}

// =============================================================
// Validating
// =============================================================

#[test]
fn invalid_submit_surfaces_all_errors_and_returns_no_snapshot() {
    let mut form = FormController::<LoginFormValues>::new();
    let err = form.begin_submit().unwrap_err();
    let SubmitError::Invalid(errors) = err else {
        panic!("expected validation failure");
    };
    assert_eq!(errors.len(), 2);
    assert_eq!(form.errors(), &errors);
    assert_eq!(form.state(), &SubmissionState::Idle);
    assert_eq!(form.rejected_attempts(), 1);
}

#[test]
fn scenario_a_blank_name_blocks_submit() {
    let mut form = FormController::<SignupFormValues>::new();
    form.set_field(Field::Email, "a@b.com");
    form.set_field(Field::Password, "secret1");
    form.set_field(Field::ConfirmPassword, "secret1");

    let err = form.begin_submit().unwrap_err();
    assert_eq!(err.to_string(), "1 field(s) failed validation");
    assert_eq!(form.errors().len(), 1);
    assert_eq!(form.error(Field::Name), Some("Name is required"));
    assert!(!form.is_submitting());
}

#[test]
fn valid_submit_enters_submitting_with_snapshot() {
    let mut form = filled_login();
    let snapshot = form.begin_submit().unwrap();
    assert_eq!(snapshot.email, "x@y.com");
    assert!(form.is_submitting());
    assert!(form.errors().is_empty());
}

#[test]
fn second_submit_while_in_flight_is_refused() {
    let mut form = filled_login();
    form.begin_submit().unwrap();
    assert_eq!(form.begin_submit().unwrap_err(), SubmitError::InFlight);
    assert!(form.is_submitting());
}

// =============================================================
// Finishing
// =============================================================

#[test]
fn failure_sets_global_message_and_keeps_values() {
    let mut form = filled_login();
    form.begin_submit().unwrap();
    let out: Option<()> = form.finish(Err(RemoteFailure::Rejected {
        status: 401,
        message: Some("Invalid login credentials".to_owned()),
    }));
    assert!(out.is_none());
    assert_eq!(form.global_error(), Some("Invalid login credentials"));
    assert_eq!(form.value(Field::Email), "x@y.com");
    assert_eq!(form.value(Field::Password), "pw123");
    assert!(!form.is_submitting());
}

#[test]
fn failure_without_message_uses_form_fallback() {
    let mut form = FormController::<SignupFormValues>::new();
    form.set_field(Field::Name, "Ada");
    form.set_field(Field::Email, "a@b.com");
    form.set_field(Field::Password, "secret1");
    form.set_field(Field::ConfirmPassword, "secret1");
    form.begin_submit().unwrap();
    let _: Option<()> = form.finish(Err(RemoteFailure::Network("offline".to_owned())));
    assert_eq!(form.global_error(), Some("Signup failed"));
}

#[test]
fn resubmit_after_failure_clears_stale_message() {
    let mut form = filled_login();
    form.begin_submit().unwrap();
    let _: Option<()> = form.finish(Err(RemoteFailure::rejected(401, "")));
    assert!(form.global_error().is_some());

    form.begin_submit().unwrap();
    assert_eq!(form.global_error(), None);
    assert!(form.is_submitting());
}

#[test]
fn invalid_submit_after_failure_clears_global_message() {
    let mut form = filled_login();
    form.begin_submit().unwrap();
    let _: Option<()> = form.finish(Err(RemoteFailure::rejected(401, "")));
    form.set_field(Field::Password, "");
    assert!(form.begin_submit().is_err());
    assert_eq!(form.global_error(), None);
}

#[test]
fn success_discards_values_and_shows_notice() {
    let mut form = FormController::<SignupFormValues>::new();
    form.set_field(Field::Name, "Ada");
    form.set_field(Field::Email, "a@b.com");
    form.set_field(Field::Password, "secret1");
    form.set_field(Field::ConfirmPassword, "secret1");
    form.begin_submit().unwrap();
    assert_eq!(form.finish(Ok(42)), Some(42));
    assert_eq!(form.state(), &SubmissionState::Succeeded);
    assert_eq!(form.notice(), Some("Registration successful! Please login to continue."));
    assert_eq!(form.values(), &SignupFormValues::default());
}

#[test]
fn login_success_has_no_notice() {
    let mut form = filled_login();
    form.begin_submit().unwrap();
    form.finish(Ok(()));
    assert_eq!(form.notice(), None);
}

#[test]
fn completion_without_submission_is_dropped() {
    let mut form = filled_login();
    assert_eq!(form.finish(Ok(1)), None);
    assert_eq!(form.state(), &SubmissionState::Idle);

    form.begin_submit().unwrap();
    assert_eq!(form.finish(Ok(2)), Some(2));
    assert_eq!(form.finish(Ok(3)), None);
}
