//! Persisted bearer-token storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Auth API client writes the token after a successful login, the session
//! store reads it once at hydration and removes it on logout. Callers hold an
//! `Arc<dyn TokenStorage>` chosen at construction time, so no call site has
//! to check whether it is running in a browser.
//!
//! TRADE-OFFS
//! ==========
//! Browser storage failures (quota, privacy mode) are swallowed and logged;
//! the worst outcome is a session that does not survive a reload.

#[cfg(test)]
#[path = "token_storage_test.rs"]
mod token_storage_test;

use std::sync::{Arc, Mutex, PoisonError};

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "jwt_token";

/// Client-local home of the persisted token.
pub trait TokenStorage: Send + Sync {
    fn read_token(&self) -> Option<String>;
    fn write_token(&self, token: &str);
    fn clear_token(&self);

    fn has_token(&self) -> bool {
        self.read_token().is_some_and(|t| !t.is_empty())
    }
}

/// Storage for the current build: `localStorage` in the browser, a no-op
/// during server rendering.
pub fn for_environment() -> Arc<dyn TokenStorage> {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(BrowserTokenStorage::new(TOKEN_STORAGE_KEY))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Arc::new(NoopTokenStorage)
    }
}

/// Pre-render storage: never holds a token, never touches anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopTokenStorage;

impl TokenStorage for NoopTokenStorage {
    fn read_token(&self) -> Option<String> {
        None
    }

    fn write_token(&self, _token: &str) {}

    fn clear_token(&self) {}
}

/// Process-local storage, shared by clones.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStorage {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: Arc::new(Mutex::new(Some(token.into()))) }
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn read_token(&self) -> Option<String> {
        self.token.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn write_token(&self, token: &str) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn clear_token(&self) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// `window.localStorage` under a fixed key.
#[cfg(feature = "hydrate")]
#[derive(Clone, Debug)]
pub struct BrowserTokenStorage {
    key: &'static str,
}

#[cfg(feature = "hydrate")]
impl BrowserTokenStorage {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "hydrate")]
impl TokenStorage for BrowserTokenStorage {
    fn read_token(&self) -> Option<String> {
        Self::storage()?.get_item(self.key).ok().flatten()
    }

    fn write_token(&self, token: &str) {
        let Some(storage) = Self::storage() else {
            log::warn!("localStorage unavailable; token not persisted");
            return;
        };
        if storage.set_item(self.key, token).is_err() {
            log::warn!("failed to persist token under {}", self.key);
        }
    }

    fn clear_token(&self) {
        let Some(storage) = Self::storage() else {
            log::warn!("localStorage unavailable; token not cleared");
            return;
        };
        if storage.remove_item(self.key).is_err() {
            log::warn!("failed to clear token under {}", self.key);
        }
    }
}
