//! Login page: email + password against the remote auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! On success the session is written to `localStorage`, mirrored into the
//! shared `SessionState`, and the user is sent to `/home`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use authflow::flow::{LoginOutcome, finish_login};
use authflow::{AuthApi, AuthResponse, Field, FormController, LoginFormValues, RemoteFailure, Route, Session};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::form_bindings::{container_class, field_error, field_input, field_value, global_error};
use crate::components::form_field::FormField;
use crate::net::api::HttpAuthApi;
use crate::state::session::SessionState;
use crate::util::session_storage::LocalStorageSession;

/// Session carried by a successful authenticate reply. The navbar is fed from
/// this even when the `localStorage` write fails.
pub fn established_session(result: &Result<AuthResponse, RemoteFailure>) -> Option<Session> {
    result.as_ref().ok().cloned().map(Session::from)
}

pub fn submit_label(submitting: bool) -> &'static str {
    if submitting { "Logging in..." } else { "Log In" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let form = RwSignal::new(FormController::<LoginFormValues>::new());
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(Ok(snapshot)) = form.try_update(FormController::begin_submit) else {
            return;
        };
        log::info!("submitting login");

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = HttpAuthApi::from_build_env().authenticate(&snapshot).await;
            let established = established_session(&result);
            let outcome = form
                .try_update(|f| finish_login(f, result, &LocalStorageSession))
                .unwrap_or(LoginOutcome::Stay);
            if let LoginOutcome::Navigate(route) = outcome {
                session.set(SessionState::restored(established));
                navigate(route.path(), NavigateOptions::default());
            }
        });
    };

    let submitting = move || form.with(FormController::is_submitting);
    let error = global_error(form);

    view! {
        <div class="auth-container">
            <div class=move || container_class(form.with(FormController::rejected_attempts))>
                <h2 class="auth-title">"Log In"</h2>

                <Show when=move || error.get().is_some()>
                    <div class="error-message-container">{move || error.get().unwrap_or_default()}</div>
                </Show>

                <form on:submit=on_submit novalidate=true>
                    <FormField
                        field=Field::Email
                        value=field_value(form, Field::Email)
                        error=field_error(form, Field::Email)
                        on_input=field_input(form, Field::Email)
                    />
                    <FormField
                        field=Field::Password
                        value=field_value(form, Field::Password)
                        error=field_error(form, Field::Password)
                        on_input=field_input(form, Field::Password)
                    >
                        <a href=Route::ForgotPassword.path() class="forgot-password">
                            "Forgot Password?"
                        </a>
                    </FormField>

                    <button type="submit" class="submit-button" disabled=submitting>
                        {move || submit_label(submitting())}
                    </button>
                </form>

                <div class="form-footer">
                    <p>
                        "Don't have an account? "
                        <a href=Route::Signup.path()>"Sign up"</a>
                    </p>
                </div>
            </div>
        </div>
    }
}
