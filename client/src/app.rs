//! Root application component with routing and context providers.

use authflow::{Route as AppRoute, SessionStore};
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{
    detect::DetectPage, landing::LandingPage, login::LoginPage, not_found::NotFound, signup::SignupPage,
};
use crate::state::session::SessionState;
use crate::util::session_storage::LocalStorageSession;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    // Effects only run in the browser, so SSR keeps the logged-out markup.
    Effect::new(move || {
        let stored = LocalStorageSession.load().unwrap_or_else(|e| {
            log::warn!("ignoring stored session: {e}");
            None
        });
        session.set(SessionState::restored(stored));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/deepcheck.css"/>
        <Title text="DeepCheck"/>

        <Router>
            <div class="app-shell">
                <Navbar/>
                <main class="app-main">
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=StaticSegment(AppRoute::Landing.segment()) view=LandingPage/>
                        <Route path=StaticSegment(AppRoute::Login.segment()) view=LoginPage/>
                        <Route path=StaticSegment(AppRoute::Signup.segment()) view=SignupPage/>
                        <Route path=StaticSegment(AppRoute::Home.segment()) view=DetectPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
