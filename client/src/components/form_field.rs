//! Labeled input bound to one form field.
//!
//! Purely presentational: the owning page supplies the value, the error, and
//! the change handler. No validation happens here.

#[cfg(test)]
#[path = "form_field_test.rs"]
mod form_field_test;

use authflow::Field;
use leptos::prelude::*;

/// CSS class for the `<input>`, flagging fields that currently have an error.
pub fn input_class(has_error: bool) -> &'static str {
    if has_error { "form-input error" } else { "form-input" }
}

/// One `form-group`: label, input, optional error text, then any children
/// (e.g. the "Forgot Password?" link).
#[component]
pub fn FormField(
    field: Field,
    value: Signal<String>,
    error: Signal<Option<String>>,
    on_input: Callback<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label class="form-label" for=field.key()>
                {field.label()}
            </label>
            <input
                type=field.input_type()
                id=field.key()
                name=field.key()
                class=move || input_class(error.get().is_some())
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <Show when=move || error.get().is_some()>
                <p class="error-message">{move || error.get().unwrap_or_default()}</p>
            </Show>
            {children.map(|c| c())}
        </div>
    }
}
