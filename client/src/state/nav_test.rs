use std::sync::Arc;

use super::*;
use crate::state::modal::ModalPhase;
use crate::util::token_storage::{MemoryTokenStorage, TokenStorage};

fn logged_in_store() -> SessionStore {
    let store = SessionStore::new(Arc::new(MemoryTokenStorage::with_token("jwt")));
    store.hydrate();
    store
}

// =============================================================
// Labels
// =============================================================

#[test]
fn logged_out_labels_follow_auth_type() {
    let session = Session { is_logged_in: false };
    assert_eq!(
        NavEntry::for_session(AuthType::Login, session),
        NavEntry { label: "Login", action: NavAction::OpenModal(AuthMode::Login) }
    );
    assert_eq!(
        NavEntry::for_session(AuthType::Signup, session),
        NavEntry { label: "Sign Up", action: NavAction::OpenModal(AuthMode::Signup) }
    );
}

#[test]
fn logged_in_shows_logout_for_every_auth_type() {
    let session = Session { is_logged_in: true };
    for auth_type in [AuthType::Login, AuthType::Signup] {
        assert_eq!(NavEntry::for_session(auth_type, session), NavEntry { label: "Logout", action: NavAction::Logout });
    }
}

#[test]
fn auth_type_deserializes_lowercase() {
    let parsed: AuthType = serde_json::from_str(r#""signup""#).unwrap();
    assert_eq!(parsed, AuthType::Signup);
}

// =============================================================
// Clicks
// =============================================================

#[test]
fn click_when_logged_out_opens_preset_modal() {
    let store = SessionStore::new(Arc::new(MemoryTokenStorage::new()));
    store.hydrate();
    let mut control = NavAuthControl::new(AuthType::Signup);
    assert_eq!(control.click(&store), NavAction::OpenModal(AuthMode::Signup));
    assert_eq!(control.modal().phase(), ModalPhase::OpenSignup);
}

#[test]
fn click_when_logged_in_logs_out_without_modal() {
    let storage = MemoryTokenStorage::with_token("jwt");
    let store = SessionStore::new(Arc::new(storage.clone()));
    store.hydrate();
    let mut control = NavAuthControl::new(AuthType::Login);
    assert_eq!(control.click(&store), NavAction::Logout);
    assert!(!control.is_modal_open());
    assert!(!store.is_logged_in());
    assert!(!storage.has_token());
}

#[test]
fn instances_keep_independent_modals() {
    let store = SessionStore::new(Arc::new(MemoryTokenStorage::new()));
    store.hydrate();
    let mut login = NavAuthControl::new(AuthType::Login);
    let mut signup = NavAuthControl::new(AuthType::Signup);

    login.click(&store);
    assert!(login.is_modal_open());
    assert!(!signup.is_modal_open());

    signup.click(&store);
    assert!(login.is_modal_open());
    assert_eq!(signup.modal().mode(), AuthMode::Signup);

    login.close_modal();
    assert!(!login.is_modal_open());
    assert!(signup.is_modal_open());
}

#[test]
fn logout_through_either_instance_updates_both() {
    for logout_via_signup in [false, true] {
        let store = logged_in_store();
        let mut login = NavAuthControl::new(AuthType::Login);
        let mut signup = NavAuthControl::new(AuthType::Signup);
        assert_eq!(login.entry(store.session()).label, "Logout");
        assert_eq!(signup.entry(store.session()).label, "Logout");

        if logout_via_signup {
            signup.click(&store);
        } else {
            login.click(&store);
        }

        assert_eq!(login.entry(store.session()).label, "Login");
        assert_eq!(signup.entry(store.session()).label, "Sign Up");
        assert!(!login.is_modal_open());
        assert!(!signup.is_modal_open());
    }
}
