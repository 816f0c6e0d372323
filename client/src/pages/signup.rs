//! Signup page: account registration against the remote auth API.
//!
//! A successful registration shows a banner pointing at the login page. No
//! session is created and no navigation happens.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use authflow::flow::finish_signup;
use authflow::{AuthApi, Form, FormController, Route, SignupFormValues};
use leptos::prelude::*;

use super::form_bindings::{container_class, field_error, field_input, field_value, global_error};
use crate::components::form_field::FormField;
use crate::net::api::HttpAuthApi;

pub fn submit_label(submitting: bool) -> &'static str {
    if submitting { "Signing up..." } else { "Sign Up" }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let form = RwSignal::new(FormController::<SignupFormValues>::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(Ok(snapshot)) = form.try_update(FormController::begin_submit) else {
            return;
        };
        log::info!("submitting signup");

        leptos::task::spawn_local(async move {
            let result = HttpAuthApi::from_build_env().register(&snapshot).await;
            form.update(|f| {
                finish_signup(f, result);
            });
        });
    };

    let submitting = move || form.with(FormController::is_submitting);
    let error = global_error(form);
    let succeeded = move || form.with(|f| f.notice().is_some());

    let fields = SignupFormValues::FIELDS
        .iter()
        .map(|&field| {
            view! {
                <FormField
                    field=field
                    value=field_value(form, field)
                    error=field_error(form, field)
                    on_input=field_input(form, field)
                />
            }
        })
        .collect_view();

    view! {
        <div class="auth-container">
            <div class=move || container_class(form.with(FormController::rejected_attempts))>
                <h2 class="auth-title">"Create an Account"</h2>

                <Show when=succeeded>
                    <div class="success-message">
                        "Registration successful! Please "
                        <a href=Route::Login.path()>"login"</a>
                        " to continue."
                    </div>
                </Show>

                <Show when=move || error.get().is_some()>
                    <div class="error-message-container">{move || error.get().unwrap_or_default()}</div>
                </Show>

                <form on:submit=on_submit novalidate=true>
                    {fields}
                    <button type="submit" class="submit-button" disabled=submitting>
                        {move || submit_label(submitting())}
                    </button>
                </form>

                <div class="form-footer">
                    <p>
                        "Already have an account? "
                        <a href=Route::Login.path()>"Log in"</a>
                    </p>
                </div>
            </div>
        </div>
    }
}
