//! Remote auth backend contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend exposes two JSON endpoints, `POST /api/signup` and
//! `POST /api/login`. Transports (gloo-net in the browser, reqwest in the CLI)
//! implement [`AuthApi`] and map every failure into a [`RemoteFailure`].
//!
//! ERROR HANDLING
//! ==============
//! A failure only carries a user-facing message when the backend supplied one
//! in its error body. Everything else falls back to the form's generic text.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::{Deserialize, Serialize};

use crate::values::{LoginFormValues, SignupFormValues};

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const SIGNUP_PATH: &str = "/api/signup";
pub const LOGIN_PATH: &str = "/api/login";

/// Failure of a register or authenticate call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoteFailure {
    /// The backend answered with a non-2xx status.
    #[error("request rejected: status {status}")]
    Rejected { status: u16, message: Option<String> },

    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),

    /// A 2xx response whose body did not have the expected shape.
    #[error("response parse failed: {0}")]
    Decode(String),
}

impl RemoteFailure {
    /// Build a rejection from a raw error body, keeping its `message` if any.
    pub fn rejected(status: u16, body: &str) -> Self {
        Self::Rejected { status, message: ErrorBody::message_from(body) }
    }

    /// Message supplied by the backend, if it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => message.as_deref(),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }

    /// Text to show the user, falling back to `fallback`.
    pub fn display_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_owned()
    }
}

/// Error payload sent by the backend. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: serde_json::Value,
}

impl ErrorBody {
    /// Extract a displayable `message` from a raw body; non-JSON bodies yield `None`.
    ///
    /// Falsy values (`""`, `0`, `false`, `null`) count as absent. Other scalars
    /// are shown as their text; objects and arrays are ignored.
    pub fn message_from(body: &str) -> Option<String> {
        let body = serde_json::from_str::<Self>(body).ok()?;
        match body.message {
            serde_json::Value::String(s) if !s.is_empty() => Some(s),
            serde_json::Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
            serde_json::Value::Bool(true) => Some("true".to_owned()),
            _ => None,
        }
    }
}

/// Successful login body: an opaque token plus whatever user record the
/// backend returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub user: serde_json::Value,
}

/// Transport for the two auth calls.
#[async_trait::async_trait(?Send)]
pub trait AuthApi {
    /// Register a new account.
    ///
    /// # Errors
    ///
    /// Returns a [`RemoteFailure`] if the request fails or is rejected.
    async fn register(&self, values: &SignupFormValues) -> Result<(), RemoteFailure>;

    /// Exchange credentials for a session.
    ///
    /// # Errors
    ///
    /// Returns a [`RemoteFailure`] if the request fails, is rejected, or the
    /// success body lacks a token.
    async fn authenticate(&self, values: &LoginFormValues) -> Result<AuthResponse, RemoteFailure>;
}

/// Trim whitespace and trailing slashes; empty input yields the default.
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_URL.to_owned() } else { trimmed.to_owned() }
}

pub fn signup_url(base_url: &str) -> String {
    format!("{}{SIGNUP_PATH}", normalize_base_url(base_url))
}

pub fn login_url(base_url: &str) -> String {
    format!("{}{LOGIN_PATH}", normalize_base_url(base_url))
}
