use leptos::reactive::owner::Owner;

use super::*;
use crate::util::token_storage::MemoryTokenStorage;

fn store_with_token() -> Arc<SessionStore> {
    Arc::new(SessionStore::new(Arc::new(MemoryTokenStorage::with_token("jwt"))))
}

// =============================================================
// Context lookup
// =============================================================

#[test]
fn try_use_auth_outside_provider_is_a_configuration_error() {
    let owner = Owner::new();
    owner.with(|| {
        assert_eq!(try_use_auth().err(), Some(ContextError::MissingProvider));
        assert_eq!(try_use_auth_services().err(), Some(ContextError::MissingServices));
    });
}

#[test]
#[should_panic(expected = "AuthProvider")]
fn use_auth_outside_provider_panics_naming_provider() {
    let owner = Owner::new();
    owner.with(|| {
        let _ = use_auth();
    });
}

#[test]
fn try_use_auth_finds_provided_context() {
    let owner = Owner::new();
    owner.with(|| {
        let store = store_with_token();
        provide_context(AuthContext::new(Arc::clone(&store)));
        let ctx = try_use_auth().unwrap();
        assert!(Arc::ptr_eq(ctx.store(), &store));
    });
}

// =============================================================
// Mirroring
// =============================================================

#[test]
fn context_signal_follows_store() {
    let owner = Owner::new();
    owner.with(|| {
        let store = store_with_token();
        let ctx = AuthContext::new(Arc::clone(&store));
        assert!(!ctx.session().get_untracked().is_logged_in);

        store.hydrate();
        assert!(ctx.session().get_untracked().is_logged_in);

        ctx.logout();
        assert!(!ctx.session().get_untracked().is_logged_in);

        ctx.login();
        assert!(ctx.session().get_untracked().is_logged_in);
    });
}

#[test]
fn detached_context_stops_following() {
    let owner = Owner::new();
    owner.with(|| {
        let store = store_with_token();
        let ctx = AuthContext::new(Arc::clone(&store));
        ctx.detach();
        store.hydrate();
        assert!(!ctx.session().get_untracked().is_logged_in);
        assert!(store.is_logged_in());
    });
}
