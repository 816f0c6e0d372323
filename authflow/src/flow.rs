//! Login and signup orchestration on top of [`FormController`].
//!
//! The `finish_*` functions apply a remote outcome and perform the flow's one
//! side effect. The `submit_*` functions run the whole sequence for callers
//! that can hold the controller across an await (the CLI, tests).

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use crate::api::{AuthApi, AuthResponse, RemoteFailure};
use crate::controller::{FormController, SubmitError};
use crate::routes::Route;
use crate::session::{Session, SessionStore};
use crate::values::{LoginFormValues, SignupFormValues};

/// What the UI should do after a login attempt settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Navigate(Route),
    Stay,
}

/// Apply an authenticate result. On success the session is persisted and the
/// caller is told to navigate to [`Route::Home`].
///
/// A failed session write is logged and does not block navigation.
pub fn finish_login<S>(
    form: &mut FormController<LoginFormValues>,
    result: Result<AuthResponse, RemoteFailure>,
    store: &S,
) -> LoginOutcome
where
    S: SessionStore + ?Sized,
{
    let Some(resp) = form.finish(result) else {
        return LoginOutcome::Stay;
    };
    let session = Session::from(resp);
    match store.save(&session) {
        Ok(()) => log::info!("session stored"),
        Err(e) => log::warn!("session not stored: {e}"),
    }
    LoginOutcome::Navigate(Route::Home)
}

/// Apply a register result. Returns `true` when the account was created.
/// Signup never establishes a session.
pub fn finish_signup(form: &mut FormController<SignupFormValues>, result: Result<(), RemoteFailure>) -> bool {
    let created = form.finish(result).is_some();
    if created {
        log::info!("account registered");
    }
    created
}

/// Validate, authenticate, and apply the outcome.
///
/// # Errors
///
/// Returns a [`SubmitError`] when the form is invalid or already submitting;
/// no request is made in either case.
pub async fn submit_login<A, S>(
    form: &mut FormController<LoginFormValues>,
    api: &A,
    store: &S,
) -> Result<LoginOutcome, SubmitError>
where
    A: AuthApi + ?Sized,
    S: SessionStore + ?Sized,
{
    let snapshot = form.begin_submit()?;
    let result = api.authenticate(&snapshot).await;
    Ok(finish_login(form, result, store))
}

/// Validate, register, and apply the outcome.
///
/// # Errors
///
/// Returns a [`SubmitError`] when the form is invalid or already submitting;
/// no request is made in either case.
pub async fn submit_signup<A>(form: &mut FormController<SignupFormValues>, api: &A) -> Result<bool, SubmitError>
where
    A: AuthApi + ?Sized,
{
    let snapshot = form.begin_submit()?;
    let result = api.register(&snapshot).await;
    Ok(finish_signup(form, result))
}
