//! Auth context shared with every session-aware component.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthProvider` puts an [`AuthContext`] into the Leptos context tree. It
//! pairs the application's `SessionStore` with a signal mirroring the
//! store's session, kept current through a store subscription, so any
//! component reading it re-renders on login/logout.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use leptos::prelude::*;

use super::session::{Session, SessionStore, SubscriptionId};
use crate::error::ContextError;
use crate::net::api::AuthApi;
use crate::util::host_page::HostPage;

/// Session handle exposed to descendants of `AuthProvider`.
#[derive(Clone)]
pub struct AuthContext {
    store: Arc<SessionStore>,
    session: RwSignal<Session>,
    subscription: SubscriptionId,
}

impl AuthContext {
    /// Mirror `store` into a new signal owned by the current reactive owner.
    pub fn new(store: Arc<SessionStore>) -> Self {
        let session = RwSignal::new(store.session());
        let subscription = store.subscribe(move |s| session.set(s));
        Self { store, session, subscription }
    }

    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    /// Reactive session value.
    pub fn session(&self) -> ReadSignal<Session> {
        self.session.read_only()
    }

    /// Tracked read: re-runs the calling view/effect on change.
    pub fn is_logged_in(&self) -> bool {
        self.session.get().is_logged_in
    }

    pub fn login(&self) {
        self.store.login();
    }

    pub fn logout(&self) {
        self.store.logout();
    }

    /// Stop mirroring the store. Called when the provider is torn down.
    pub fn detach(&self) {
        self.store.unsubscribe(self.subscription);
    }
}

/// Auth context of the enclosing `AuthProvider`.
///
/// # Errors
///
/// [`ContextError::MissingProvider`] outside an `AuthProvider` subtree.
pub fn try_use_auth() -> Result<AuthContext, ContextError> {
    use_context::<AuthContext>().ok_or(ContextError::MissingProvider)
}

/// Like [`try_use_auth`], for components that cannot render without it.
///
/// # Panics
///
/// Outside an `AuthProvider` subtree, with the missing-provider message.
pub fn use_auth() -> AuthContext {
    try_use_auth().unwrap_or_else(|e| panic!("{e}"))
}

/// Browser capabilities the auth modal drives, injected by the app root.
#[derive(Clone)]
pub struct AuthServices {
    pub api: Arc<dyn AuthApi>,
    pub host: Arc<dyn HostPage>,
}

impl AuthServices {
    pub fn new(api: Arc<dyn AuthApi>, host: Arc<dyn HostPage>) -> Self {
        Self { api, host }
    }
}

/// # Errors
///
/// [`ContextError::MissingServices`] when the app root did not provide them.
pub fn try_use_auth_services() -> Result<AuthServices, ContextError> {
    use_context::<AuthServices>().ok_or(ContextError::MissingServices)
}

/// # Panics
///
/// When the app root did not provide [`AuthServices`].
pub fn use_auth_services() -> AuthServices {
    try_use_auth_services().unwrap_or_else(|e| panic!("{e}"))
}
