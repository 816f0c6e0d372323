//! Glue between a `FormController` signal and `FormField` props.

#[cfg(test)]
#[path = "form_bindings_test.rs"]
mod form_bindings_test;

use authflow::{Field, Form, FormController};
use leptos::prelude::*;

/// Outer container class. The shake class alternates between two names on
/// each rejected submit so the CSS animation restarts every time.
pub fn container_class(rejected_attempts: u32) -> &'static str {
    match rejected_attempts {
        0 => "auth-form-container",
        n if n % 2 == 1 => "auth-form-container shake",
        _ => "auth-form-container shake-again",
    }
}

pub fn field_value<F>(form: RwSignal<FormController<F>>, field: Field) -> Signal<String>
where
    F: Form + Send + Sync + 'static,
{
    Signal::derive(move || form.with(|f| f.value(field).to_owned()))
}

pub fn field_error<F>(form: RwSignal<FormController<F>>, field: Field) -> Signal<Option<String>>
where
    F: Form + Send + Sync + 'static,
{
    Signal::derive(move || form.with(|f| f.error(field).map(str::to_owned)))
}

pub fn field_input<F>(form: RwSignal<FormController<F>>, field: Field) -> Callback<String>
where
    F: Form + Send + Sync + 'static,
{
    Callback::new(move |value: String| form.update(|f| f.set_field(field, value)))
}

pub fn global_error<F>(form: RwSignal<FormController<F>>) -> Signal<Option<String>>
where
    F: Form + Send + Sync + 'static,
{
    Signal::derive(move || form.with(|f| f.global_error().map(str::to_owned)))
}
