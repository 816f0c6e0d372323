//! `reqwest` transport for the auth API.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use authflow::api::{login_url, normalize_base_url, signup_url};
use authflow::{AuthApi, AuthResponse, LoginFormValues, RemoteFailure, SignupFormValues};
use serde::Serialize;

use crate::commands::CliError;

pub struct ReqwestAuthApi {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestAuthApi {
    /// # Errors
    ///
    /// Returns [`CliError::Http`] if the TLS backend cannot initialize.
    pub fn new(base_url: &str) -> Result<Self, CliError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client, base_url: normalize_base_url(base_url) })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET the base URL and return the status code.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Http`] if no response arrives.
    pub async fn probe(&self) -> Result<u16, CliError> {
        let url = format!("{}/", self.base_url);
        tracing::debug!(%url, "GET");
        let response = self.client.get(url).send().await?;
        Ok(response.status().as_u16())
    }

    /// POST `body` as JSON and return the status and raw response text.
    async fn post_json<B: Serialize + ?Sized>(&self, url: &str, body: &B) -> Result<(u16, String), RemoteFailure> {
        tracing::debug!(%url, "POST");
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| RemoteFailure::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| RemoteFailure::Network(e.to_string()))?;
        tracing::debug!(status, "response");
        Ok((status, text))
    }
}

/// Interpret a register reply: any 2xx is success, its body is ignored.
pub(crate) fn register_reply(status: u16, body: &str) -> Result<(), RemoteFailure> {
    if (200..300).contains(&status) { Ok(()) } else { Err(RemoteFailure::rejected(status, body)) }
}

/// Interpret a login reply: a 2xx must carry a token.
pub(crate) fn login_reply(status: u16, body: &str) -> Result<AuthResponse, RemoteFailure> {
    if !(200..300).contains(&status) {
        return Err(RemoteFailure::rejected(status, body));
    }
    serde_json::from_str(body).map_err(|e| RemoteFailure::Decode(e.to_string()))
}

#[async_trait::async_trait(?Send)]
impl AuthApi for ReqwestAuthApi {
    async fn register(&self, values: &SignupFormValues) -> Result<(), RemoteFailure> {
        let (status, body) = self.post_json(&signup_url(self.base_url()), values).await?;
        register_reply(status, &body)
    }

    async fn authenticate(&self, values: &LoginFormValues) -> Result<AuthResponse, RemoteFailure> {
        let (status, body) = self.post_json(&login_url(self.base_url()), values).await?;
        login_reply(status, &body)
    }
}
