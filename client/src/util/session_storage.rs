//! `localStorage`-backed session store.
//!
//! The token is stored verbatim under `token` and the user record as JSON
//! under `user`. Requires a browser environment; outside one, reads come back
//! empty and writes report the storage as unavailable.

#[cfg(test)]
#[path = "session_storage_test.rs"]
mod session_storage_test;

use authflow::{Session, SessionError, SessionStore};
#[cfg(feature = "hydrate")]
use authflow::session::{TOKEN_KEY, USER_KEY};

/// Handle to the browser's `localStorage` session slots.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageSession;

#[cfg(feature = "hydrate")]
fn storage() -> Result<web_sys::Storage, SessionError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| SessionError::Unavailable("localStorage is not accessible".to_owned()))
}

#[cfg(feature = "hydrate")]
fn js_error(err: &wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Rebuild a session from raw stored values. A token without a user record
/// yields a null user.
pub fn decode_session(token: Option<String>, user: Option<String>) -> Result<Option<Session>, SessionError> {
    let Some(token) = token else {
        return Ok(None);
    };
    let user = match user {
        Some(raw) => serde_json::from_str(&raw).map_err(|e| SessionError::Malformed(e.to_string()))?,
        None => serde_json::Value::Null,
    };
    Ok(Some(Session { token, user }))
}

impl SessionStore for LocalStorageSession {
    fn save(&self, session: &Session) -> Result<(), SessionError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = storage()?;
            let user = serde_json::to_string(&session.user).map_err(|e| SessionError::Write(e.to_string()))?;
            storage
                .set_item(TOKEN_KEY, &session.token)
                .map_err(|e| SessionError::Write(js_error(&e)))?;
            storage
                .set_item(USER_KEY, &user)
                .map_err(|e| SessionError::Write(js_error(&e)))?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
            Err(SessionError::Unavailable("no browser storage".to_owned()))
        }
    }

    fn load(&self) -> Result<Option<Session>, SessionError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = storage()?;
            let token = storage.get_item(TOKEN_KEY).ok().flatten();
            let user = storage.get_item(USER_KEY).ok().flatten();
            decode_session(token, user)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(None)
        }
    }

    fn clear(&self) -> Result<(), SessionError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = storage()?;
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(())
        }
    }
}
