//! Error types for the auth layer.
//!
//! ERROR HANDLING
//! ==============
//! Every Auth API failure is caught at the modal boundary and collapsed into
//! one user-visible string via [`AuthError::user_message`]. Nothing here is
//! fatal to the surrounding page.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Shown when a failure carries no usable message of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

/// Failures surfaced by the modal and the Auth API client.
///
/// Each variant carries the human-readable message supplied by whoever
/// produced it, if any.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Missing or malformed input, caught locally or rejected by the API.
    #[error("validation failed: {}", describe(.0.as_deref()))]
    Validation(Option<String>),
    /// Invalid credentials.
    #[error("authentication failed: {}", describe(.0.as_deref()))]
    Auth(Option<String>),
    /// The email is already registered.
    #[error("conflict: {}", describe(.0.as_deref()))]
    Conflict(Option<String>),
    /// The request could not complete.
    #[error("network error: {}", describe(.0.as_deref()))]
    Network(Option<String>),
}

impl AuthError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(Some(message.into()))
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(Some(message.into()))
    }

    /// The message attached to this error, ignoring blank ones.
    pub fn message(&self) -> Option<&str> {
        let (Self::Validation(m) | Self::Auth(m) | Self::Conflict(m) | Self::Network(m)) = self;
        m.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// Text displayed in the modal for this failure.
    pub fn user_message(&self) -> String {
        self.message().unwrap_or(FALLBACK_ERROR_MESSAGE).to_owned()
    }
}

fn describe(message: Option<&str>) -> &str {
    message.unwrap_or("no details")
}

/// Misconfiguration of the component tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContextError {
    #[error("auth context is missing: components reading the session must be rendered inside <AuthProvider>")]
    MissingProvider,
    #[error("auth services are missing: <App> must provide AuthServices before rendering auth components")]
    MissingServices,
}
