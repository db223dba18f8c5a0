//! Provider exposing the session store to the page tree.

#[cfg(test)]
#[path = "auth_provider_test.rs"]
mod auth_provider_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::state::auth::AuthContext;
use crate::state::session::SessionStore;

/// Wraps `children` with an [`AuthContext`] over `store`.
///
/// The session stays signed out through server rendering; hydration reads
/// the persisted token from an effect, which only runs in the browser.
#[component]
pub fn AuthProvider(store: Arc<SessionStore>, children: Children) -> impl IntoView {
    let ctx = provide_auth(store);

    let hydrating = Arc::clone(ctx.store());
    Effect::new(move || {
        hydrating.hydrate();
    });

    children()
}

/// Provide an [`AuthContext`] for the current owner and detach it when the
/// owner is cleaned up.
fn provide_auth(store: Arc<SessionStore>) -> AuthContext {
    let ctx = AuthContext::new(store);
    provide_context(ctx.clone());
    let detaching = ctx.clone();
    on_cleanup(move || detaching.detach());
    ctx
}
