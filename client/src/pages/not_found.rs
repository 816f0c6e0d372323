//! Fallback for unmatched routes, including the linked-but-unbuilt
//! `/forgot-password`.

use authflow::Route;
use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="container not-found">
            <h2>"Page not found."</h2>
            <a href=Route::Landing.path()>"Back to start"</a>
        </div>
    }
}
