//! Auth API client.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a network error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses are classified by status into [`AuthError`] variants and
//! carry the server's `detail` message when present. Transport failures are
//! logged and surfaced without a message so the modal shows the generic
//! fallback.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use async_trait::async_trait;

use super::types::SignupProfile;
use crate::config::AuthApiConfig;
use crate::error::AuthError;
use crate::util::token_storage::TokenStorage;

pub const LOGIN_PATH: &str = "/auth/login";
pub const SIGNUP_PATH: &str = "/auth/signup";

/// External identity service consumed by the auth modal.
///
/// Futures are not `Send`: the browser runtime is single-threaded.
#[async_trait(?Send)]
pub trait AuthApi: Send + Sync {
    /// Authenticate; on success a bearer token has been persisted.
    async fn login(&self, email: &str, password: &str) -> Result<(), AuthError>;

    /// Register a new account. Does not log the user in.
    async fn signup(&self, profile: &SignupProfile) -> Result<(), AuthError>;
}

/// HTTP implementation talking to the configured Auth API.
#[derive(Clone)]
pub struct HttpAuthApi {
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    config: AuthApiConfig,
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    storage: Arc<dyn TokenStorage>,
}

impl HttpAuthApi {
    pub fn new(config: AuthApiConfig, storage: Arc<dyn TokenStorage>) -> Self {
        Self { config, storage }
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn login(&self, email: &str, password: &str) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let credentials = super::types::Credentials { email: email.to_owned(), password: password.to_owned() };
            let resp = post_json(&self.config.endpoint(LOGIN_PATH), &credentials).await?;
            let body: super::types::TokenResponse = resp.json().await.map_err(|e| {
                log::warn!("login response was not a token body: {e}");
                AuthError::Network(None)
            })?;
            self.storage.write_token(&body.access_token);
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(AuthError::network("not available on server"))
        }
    }

    async fn signup(&self, profile: &SignupProfile) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            post_json(&self.config.endpoint(SIGNUP_PATH), profile).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = profile;
            Err(AuthError::network("not available on server"))
        }
    }
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::Serialize>(url: &str, payload: &T) -> Result<gloo_net::http::Response, AuthError> {
    let resp = gloo_net::http::Request::post(url)
        .json(payload)
        .map_err(|e| {
            log::warn!("failed to encode request for {url}: {e}");
            AuthError::Network(None)
        })?
        .send()
        .await
        .map_err(|e| {
            log::warn!("request to {url} failed: {e}");
            AuthError::Network(None)
        })?;
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.json::<super::types::ErrorBody>().await.unwrap_or_default();
    log::debug!("{url} responded {status}");
    Err(classify_failure(status, body.into_message()))
}

/// Map a non-2xx status and its message onto the error taxonomy.
#[cfg(any(test, feature = "hydrate"))]
fn classify_failure(status: u16, message: Option<String>) -> AuthError {
    match status {
        400 | 422 => AuthError::Validation(message),
        409 => AuthError::Conflict(message),
        500..=599 => AuthError::Network(message),
        _ => AuthError::Auth(message),
    }
}
