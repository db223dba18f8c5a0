//! Modal submission flow: validate, call the Auth API, settle the outcome.
//!
//! SYSTEM CONTEXT
//! ==============
//! The modal state lives in a Leptos signal in the browser and in a plain
//! `RefCell` in tests. `ModalCell` abstracts over both so one driver runs
//! the whole round trip. The state is never borrowed across the await.
//!
//! After a successful login the session is marked active (notifying every
//! subscriber), the reader is told, the modal closes and the page is
//! reloaded exactly once, so any markup that depends on the session is
//! rebuilt.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use std::cell::RefCell;

use leptos::prelude::*;

use super::auth::AuthServices;
use super::modal::{AuthModalState, SubmitOutcome};
use super::session::SessionStore;

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful!";
pub const SIGNUP_SUCCESS_MESSAGE: &str = "Signup successful! Please login.";

/// Somewhere an [`AuthModalState`] can be updated in place.
pub trait ModalCell {
    /// Run `f` on the modal. `None` if the backing storage is gone.
    fn with_modal<R>(&self, f: impl FnOnce(&mut AuthModalState) -> R) -> Option<R>;
}

impl<T: AsMut<AuthModalState>> ModalCell for RefCell<T> {
    fn with_modal<R>(&self, f: impl FnOnce(&mut AuthModalState) -> R) -> Option<R> {
        Some(f(self.borrow_mut().as_mut()))
    }
}

impl<T> ModalCell for RwSignal<T>
where
    T: AsMut<AuthModalState> + Send + Sync + 'static,
{
    fn with_modal<R>(&self, f: impl FnOnce(&mut AuthModalState) -> R) -> Option<R> {
        self.try_update(|value| f(value.as_mut()))
    }
}

/// Submit the modal in `cell`.
///
/// Returns `None` when nothing was sent: the modal was closed, already
/// submitting, or the input failed validation (the draft then shows why).
pub async fn submit_modal<C: ModalCell + ?Sized>(
    cell: &C,
    session: &SessionStore,
    services: &AuthServices,
) -> Option<SubmitOutcome> {
    let pending = match cell.with_modal(AuthModalState::begin_submit)? {
        Ok(pending) => pending,
        Err(blocked) => {
            log::debug!("submit blocked: {blocked}");
            return None;
        }
    };
    let mode = pending.request.mode();
    log::debug!("submitting {} request", mode.title().to_lowercase());

    let result = pending.request.send(services.api.as_ref()).await;
    let outcome = cell
        .with_modal(|modal| modal.finish_submit(&pending, result.clone()))
        .unwrap_or_else(|| SubmitOutcome::of(mode, &result));

    settle(cell, &outcome, session, services);
    Some(outcome)
}

fn settle<C: ModalCell + ?Sized>(cell: &C, outcome: &SubmitOutcome, session: &SessionStore, services: &AuthServices) {
    match outcome {
        SubmitOutcome::LoggedIn => {
            log::info!("login succeeded");
            session.login();
            services.host.acknowledge(LOGIN_SUCCESS_MESSAGE);
            cell.with_modal(AuthModalState::close);
            services.host.reload();
        }
        SubmitOutcome::SignedUp => {
            log::info!("signup succeeded");
            services.host.acknowledge(SIGNUP_SUCCESS_MESSAGE);
        }
        SubmitOutcome::Failed(message) => log::warn!("auth request rejected: {message}"),
    }
}
