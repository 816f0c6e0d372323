//! Public landing page at `/`.

use authflow::Route;
use leptos::prelude::*;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="container landing">
            <h1 class="landing-title">"Welcome to DeepCheck"</h1>
            <p>"Sign up or log in to check a video for signs of manipulation."</p>
            <div class="landing-actions">
                <a href=Route::Signup.path() class="submit-button">"Create an account"</a>
                <a href=Route::Login.path() class="navbar-link">"I already have one"</a>
            </div>
        </div>
    }
}
