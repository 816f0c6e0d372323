//! REST transport for the remote auth backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a network failure since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is mapped into `authflow::RemoteFailure`. Non-2xx bodies are
//! read as text and mined for a `message` field so the form can surface it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use authflow::api::{AuthApi, AuthResponse, DEFAULT_API_URL, RemoteFailure, normalize_base_url};
use authflow::{LoginFormValues, SignupFormValues};

#[cfg(any(test, not(feature = "hydrate")))]
const NOT_IN_BROWSER: &str = "not available on server";

/// Backend base URL baked in at build time from `DEEPCHECK_API_URL`.
pub fn api_base_url() -> String {
    base_url_from(option_env!("DEEPCHECK_API_URL"))
}

fn base_url_from(configured: Option<&str>) -> String {
    normalize_base_url(configured.unwrap_or(DEFAULT_API_URL))
}

/// `fetch`-backed implementation of [`AuthApi`].
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    base_url: String,
}

impl HttpAuthApi {
    pub fn new(base_url: &str) -> Self {
        Self { base_url: normalize_base_url(base_url) }
    }

    pub fn from_build_env() -> Self {
        Self { base_url: api_base_url() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::Serialize>(url: &str, body: &T) -> Result<gloo_net::http::Response, RemoteFailure> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| RemoteFailure::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| RemoteFailure::Network(e.to_string()))?;
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(RemoteFailure::rejected(status, &body))
}

#[async_trait::async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn register(&self, values: &SignupFormValues) -> Result<(), RemoteFailure> {
        #[cfg(feature = "hydrate")]
        {
            let url = authflow::api::signup_url(&self.base_url);
            post_json(&url, values).await?;
            log::info!("signup accepted by {url}");
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = values;
            Err(RemoteFailure::Network(NOT_IN_BROWSER.to_owned()))
        }
    }

    async fn authenticate(&self, values: &LoginFormValues) -> Result<AuthResponse, RemoteFailure> {
        #[cfg(feature = "hydrate")]
        {
            let url = authflow::api::login_url(&self.base_url);
            let resp = post_json(&url, values).await?;
            resp.json::<AuthResponse>()
                .await
                .map_err(|e| RemoteFailure::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = values;
            Err(RemoteFailure::Network(NOT_IN_BROWSER.to_owned()))
        }
    }
}
