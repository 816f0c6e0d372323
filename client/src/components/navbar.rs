//! Top navigation bar.

use authflow::{Route, SessionStore};
use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::util::session_storage::LocalStorageSession;

/// Brand link plus login/signup links, or the signed-in user and a log-out
/// button once a session exists.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let on_logout = move |_| {
        if let Err(e) = LocalStorageSession.clear() {
            log::warn!("failed to clear session: {e}");
        }
        session.set(SessionState::restored(None));
    };

    view! {
        <nav class="navbar">
            <div class="navbar-container">
                <a href=Route::Landing.path() class="navbar-brand">
                    "DeepCheck"
                </a>
                <Show when=move || session.with(|s| s.loaded)>
                    <div class="navbar-links">
                        <Show
                            when=move || session.with(SessionState::is_authenticated)
                            fallback=|| {
                                view! {
                                    <a href=Route::Login.path() class="navbar-link">
                                        "Login"
                                    </a>
                                    <a href=Route::Signup.path() class="navbar-button">
                                        "Sign Up"
                                    </a>
                                }
                            }
                        >
                            <a href=Route::Home.path() class="navbar-link">
                                {move || session.with(SessionState::display_name).unwrap_or_default()}
                            </a>
                            <button class="navbar-button" on:click=on_logout>
                                "Log out"
                            </button>
                        </Show>
                    </div>
                </Show>
            </div>
        </nav>
    }
}
