//! Session persistence contract.
//!
//! DESIGN
//! ======
//! The session is written once after a successful login and read by anything
//! that needs auth context. Callers receive the store explicitly (Leptos
//! context, CLI argument) so tests can swap in [`MemorySessionStore`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use crate::api::AuthResponse;

/// Storage key holding the opaque token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the JSON-encoded user record.
pub const USER_KEY: &str = "user";

/// Token and user record returned by a successful login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    #[serde(default)]
    pub user: serde_json::Value,
}

impl From<AuthResponse> for Session {
    fn from(resp: AuthResponse) -> Self {
        Self { token: resp.token, user: resp.user }
    }
}

impl Session {
    /// Best-effort display name pulled from the opaque user record.
    pub fn display_name(&self) -> Option<&str> {
        ["name", "email"]
            .iter()
            .find_map(|key| self.user.get(*key).and_then(serde_json::Value::as_str))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The backing storage could not be reached.
    #[error("session storage unavailable: {0}")]
    Unavailable(String),

    /// A stored record exists but cannot be decoded.
    #[error("stored session is malformed: {0}")]
    Malformed(String),

    /// The backing storage refused the write.
    #[error("session write failed: {0}")]
    Write(String),
}

/// Key/value holder of the authenticated session.
pub trait SessionStore {
    /// Persist `session`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] if the backend cannot store the record.
    fn save(&self, session: &Session) -> Result<(), SessionError>;

    /// Read the persisted session, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] if the backend is unavailable or the stored
    /// record cannot be decoded.
    fn load(&self) -> Result<Option<Session>, SessionError>;

    /// Remove the persisted session.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] if the backend refuses the removal.
    fn clear(&self) -> Result<(), SessionError>;
}

/// In-process store. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    inner: Arc<Mutex<MemorySlot>>,
}

#[derive(Debug, Default)]
struct MemorySlot {
    session: Option<Session>,
    writes: usize,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `save` calls so far.
    pub fn writes(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).writes
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, session: &Session) -> Result<(), SessionError> {
        let mut slot = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        slot.session = Some(session.clone());
        slot.writes += 1;
        Ok(())
    }

    fn load(&self) -> Result<Option<Session>, SessionError> {
        Ok(self.inner.lock().unwrap_or_else(PoisonError::into_inner).session.clone())
    }

    fn clear(&self) -> Result<(), SessionError> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).session = None;
        Ok(())
    }
}
