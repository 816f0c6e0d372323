//! Subcommand implementations.
//!
//! Each command drives the shared `authflow` controller exactly as the web
//! forms do and returns the text to print on success.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use std::process::ExitCode;

use authflow::flow::{LoginOutcome, submit_login, submit_signup};
use authflow::{
    AuthApi, Field, Form, FormController, FormErrors, LoginFormValues, SessionError, SessionStore, SignupFormValues,
    SubmitError,
};

use crate::http::ReqwestAuthApi;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{}", describe_field_errors(.0))]
    Invalid(FormErrors),

    #[error("a submission is already in flight")]
    InFlight,

    #[error("{0}")]
    Rejected(String),

    #[error("session storage: {0}")]
    Session(#[from] SessionError),

    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("backend unhealthy: HTTP {0}")]
    Unhealthy(u16),

    #[error("not logged in")]
    NotLoggedIn,

    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl From<SubmitError> for CliError {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::Invalid(errors) => Self::Invalid(errors),
            SubmitError::InFlight => Self::InFlight,
        }
    }
}

impl CliError {
    /// Validation problems exit with 2, everything else with 1.
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::Invalid(_) => 2,
            _ => 1,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

/// One `key: message` line per invalid field, in field order.
pub fn describe_field_errors(errors: &FormErrors) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{}: {message}", field.key()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn fill<F: Form>(pairs: &[(Field, &str)]) -> FormController<F> {
    let mut form = FormController::new();
    for (field, value) in pairs {
        form.set_field(*field, *value);
    }
    form
}

fn rejection<F: Form>(form: &FormController<F>) -> CliError {
    CliError::Rejected(form.global_error().unwrap_or(F::FAILURE_FALLBACK).to_owned())
}

/// # Errors
///
/// Returns [`CliError::Invalid`] without contacting the backend when the
/// fields fail validation, or [`CliError::Rejected`] with the backend's
/// message when registration fails.
pub async fn run_signup<A>(
    api: &A,
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<String, CliError>
where
    A: AuthApi + ?Sized,
{
    let mut form: FormController<SignupFormValues> = fill(&[
        (Field::Name, name),
        (Field::Email, email),
        (Field::Password, password),
        (Field::ConfirmPassword, confirm_password),
    ]);
    if submit_signup(&mut form, api).await? {
        Ok(form.notice().unwrap_or_default().to_owned())
    } else {
        Err(rejection(&form))
    }
}

/// # Errors
///
/// Returns [`CliError::Invalid`] without contacting the backend when the
/// fields fail validation, or [`CliError::Rejected`] with the backend's
/// message when authentication fails.
pub async fn run_login<A, S>(api: &A, store: &S, email: &str, password: &str) -> Result<String, CliError>
where
    A: AuthApi + ?Sized,
    S: SessionStore + ?Sized,
{
    let mut form: FormController<LoginFormValues> = fill(&[(Field::Email, email), (Field::Password, password)]);
    match submit_login(&mut form, api, store).await? {
        LoginOutcome::Navigate(_) => {
            let who = store
                .load()?
                .and_then(|s| s.display_name().map(str::to_owned))
                .unwrap_or_else(|| email.to_owned());
            Ok(format!("Logged in as {who}"))
        }
        LoginOutcome::Stay => Err(rejection(&form)),
    }
}

/// Probe the backend root. Any answer below 500 counts as reachable.
///
/// # Errors
///
/// Returns [`CliError::Http`] when the backend cannot be reached, or
/// [`CliError::Unhealthy`] on a 5xx status.
pub async fn run_ping(api: &ReqwestAuthApi) -> Result<String, CliError> {
    let status = api.probe().await?;
    if status >= 500 {
        return Err(CliError::Unhealthy(status));
    }
    Ok(format!("ok (HTTP {status})"))
}

/// # Errors
///
/// Returns [`CliError::NotLoggedIn`] when no session is stored.
pub fn run_whoami<S: SessionStore + ?Sized>(store: &S) -> Result<String, CliError> {
    let session = store.load()?.ok_or(CliError::NotLoggedIn)?;
    Ok(serde_json::to_string_pretty(&session.user)?)
}

/// # Errors
///
/// Returns a [`CliError::Session`] if the stored session cannot be removed.
pub fn run_logout<S: SessionStore + ?Sized>(store: &S) -> Result<String, CliError> {
    store.clear()?;
    Ok("Logged out".to_owned())
}
