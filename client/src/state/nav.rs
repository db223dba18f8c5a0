//! Navbar auth entry model.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each configured `custom-AuthLink` navbar item owns one `NavAuthControl`.
//! Instances share the session (through the store) but nothing else: each
//! keeps its own modal, and opening one never closes another.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use serde::Deserialize;

use super::modal::{AuthMode, AuthModalState};
use super::session::{Session, SessionStore};

/// Which form a navbar entry offers when signed out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthType {
    #[default]
    Login,
    Signup,
}

impl AuthType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Signup => "Sign Up",
        }
    }

    pub fn preset_mode(self) -> AuthMode {
        match self {
            Self::Login => AuthMode::Login,
            Self::Signup => AuthMode::Signup,
        }
    }
}

/// What clicking the entry does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    Logout,
    OpenModal(AuthMode),
}

/// Rendered navbar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub action: NavAction,
}

impl NavEntry {
    pub fn for_session(auth_type: AuthType, session: Session) -> Self {
        if session.is_logged_in {
            Self { label: "Logout", action: NavAction::Logout }
        } else {
            Self { label: auth_type.label(), action: NavAction::OpenModal(auth_type.preset_mode()) }
        }
    }
}

/// One navbar auth entry and the modal it owns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavAuthControl {
    auth_type: AuthType,
    modal: AuthModalState,
}

impl NavAuthControl {
    pub fn new(auth_type: AuthType) -> Self {
        Self { auth_type, modal: AuthModalState::closed(auth_type.preset_mode()) }
    }

    pub fn auth_type(&self) -> AuthType {
        self.auth_type
    }

    pub fn modal(&self) -> &AuthModalState {
        &self.modal
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.is_open()
    }

    pub fn entry(&self, session: Session) -> NavEntry {
        NavEntry::for_session(self.auth_type, session)
    }

    /// Handle a click given the current session: log out directly, or open
    /// this instance's modal. Returns the action taken.
    pub fn click(&mut self, store: &SessionStore) -> NavAction {
        let action = self.entry(store.session()).action;
        match action {
            NavAction::Logout => store.logout(),
            NavAction::OpenModal(mode) => self.modal.open(mode),
        }
        action
    }

    pub fn close_modal(&mut self) {
        self.modal.close();
    }
}

impl AsRef<AuthModalState> for NavAuthControl {
    fn as_ref(&self) -> &AuthModalState {
        &self.modal
    }
}

impl AsMut<AuthModalState> for NavAuthControl {
    fn as_mut(&mut self) -> &mut AuthModalState {
        &mut self.modal
    }
}
