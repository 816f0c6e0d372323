//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written by the login page after a successful authenticate call and read by
//! the navbar. The durable copy lives in `localStorage` (see
//! `util::session_storage`); this signal mirrors it for rendering.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use authflow::Session;

/// Reactive mirror of the persisted session.
///
/// `loaded` stays `false` until the browser copy has been read, so SSR and the
/// first hydrate pass render the same logged-out markup.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub session: Option<Session>,
    pub loaded: bool,
}

impl SessionState {
    pub fn restored(session: Option<Session>) -> Self {
        Self { session, loaded: true }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Name shown in the navbar; `"Account"` when the user record has none.
    pub fn display_name(&self) -> Option<String> {
        self.session
            .as_ref()
            .map(|s| s.display_name().unwrap_or("Account").to_owned())
    }
}
