//! Login/signup modal state machine.
//!
//! DESIGN
//! ======
//! Phases: `Closed`, `OpenLogin`, `OpenSignup`, `Submitting`, `Error`.
//! `Error` is a sub-state of an open form: the draft stays editable and can
//! be resubmitted. The phase is derived from the draft rather than stored,
//! so the two can never disagree.
//!
//! Every open request starts a fresh draft. Switching between login and
//! signup keeps the email, drops the password and clears any error.
//!
//! A submission is tagged with the modal's generation. Closing or reopening
//! bumps the generation, so a response arriving for an abandoned draft does
//! not overwrite the one the reader is now looking at.
//!
//! The loading flag belongs to the modal instance, not the draft: it
//! survives close and reopen, so one instance never has two requests in
//! flight.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use thiserror::Error;

use crate::error::AuthError;
use crate::net::api::AuthApi;
use crate::net::types::{Credentials, ExperienceLevel, SignupProfile};

/// Which form the modal shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Signup => "Signup",
        }
    }

    pub fn other(self) -> Self {
        match self {
            Self::Login => Self::Signup,
            Self::Signup => Self::Login,
        }
    }

    /// Footer prompt offering the other mode.
    pub fn switch_prompt(self) -> (&'static str, &'static str) {
        match self {
            Self::Login => ("Don't have an account?", "Sign up"),
            Self::Signup => ("Already have an account?", "Log in"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalPhase {
    Closed,
    OpenLogin,
    OpenSignup,
    Submitting,
    Error,
}

/// Form contents of one open modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalDraft {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    pub experience_level: ExperienceLevel,
    pub error: Option<String>,
    pub is_loading: bool,
}

impl ModalDraft {
    fn new(mode: AuthMode) -> Self {
        Self { mode, ..Self::default() }
    }
}

/// Why `begin_submit` did not produce a request.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitBlocked {
    #[error("modal is closed")]
    Closed,
    #[error("a submission is already in flight")]
    InFlight,
    #[error(transparent)]
    Invalid(AuthError),
}

/// Validated payload for the Auth API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitRequest {
    Login(Credentials),
    Signup(SignupProfile),
}

impl SubmitRequest {
    pub fn mode(&self) -> AuthMode {
        match self {
            Self::Login(_) => AuthMode::Login,
            Self::Signup(_) => AuthMode::Signup,
        }
    }

    /// Send the request to `api`.
    ///
    /// # Errors
    ///
    /// Whatever the Auth API rejects the request with.
    pub async fn send(&self, api: &dyn AuthApi) -> Result<(), AuthError> {
        match self {
            Self::Login(c) => api.login(&c.email, &c.password).await,
            Self::Signup(profile) => api.signup(profile).await,
        }
    }
}

/// A submission started by [`AuthModalState::begin_submit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSubmit {
    generation: u64,
    pub request: SubmitRequest,
}

/// Result of a finished submission, for the caller to act on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Login accepted: mark the session, close, reload.
    LoggedIn,
    /// Account created: the modal now shows the login form.
    SignedUp,
    /// Rejected; carries the message now shown in the modal.
    Failed(String),
}

impl SubmitOutcome {
    /// Outcome of a `mode` submission that resolved with `result`.
    pub fn of(mode: AuthMode, result: &Result<(), AuthError>) -> Self {
        match (result, mode) {
            (Ok(()), AuthMode::Login) => Self::LoggedIn,
            (Ok(()), AuthMode::Signup) => Self::SignedUp,
            (Err(err), _) => Self::Failed(err.user_message()),
        }
    }
}

/// One modal instance: open flag plus draft.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthModalState {
    open: bool,
    generation: u64,
    draft: ModalDraft,
}

impl AuthModalState {
    pub fn closed(mode: AuthMode) -> Self {
        Self { open: false, generation: 0, draft: ModalDraft::new(mode) }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn draft(&self) -> &ModalDraft {
        &self.draft
    }

    pub fn mode(&self) -> AuthMode {
        self.draft.mode
    }

    pub fn is_loading(&self) -> bool {
        self.draft.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.draft.error.as_deref()
    }

    pub fn phase(&self) -> ModalPhase {
        if !self.open {
            ModalPhase::Closed
        } else if self.draft.is_loading {
            ModalPhase::Submitting
        } else if self.draft.error.is_some() {
            ModalPhase::Error
        } else {
            match self.draft.mode {
                AuthMode::Login => ModalPhase::OpenLogin,
                AuthMode::Signup => ModalPhase::OpenSignup,
            }
        }
    }

    /// Open with a fresh draft preset to `mode`.
    ///
    /// A request still in flight from an earlier opening keeps the new draft
    /// in `Submitting` until it resolves.
    pub fn open(&mut self, mode: AuthMode) {
        let in_flight = self.draft.is_loading;
        self.generation += 1;
        self.open = true;
        self.draft = ModalDraft { is_loading: in_flight, ..ModalDraft::new(mode) };
    }

    pub fn close(&mut self) {
        if self.open {
            self.generation += 1;
        }
        self.open = false;
    }

    /// Switch form. Refused while a submission is in flight.
    pub fn set_mode(&mut self, mode: AuthMode) -> bool {
        if self.draft.is_loading {
            return false;
        }
        if self.draft.mode != mode {
            self.draft.mode = mode;
            self.draft.password.clear();
            self.draft.error = None;
        }
        true
    }

    pub fn toggle_mode(&mut self) -> bool {
        self.set_mode(self.draft.mode.other())
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        if !self.draft.is_loading {
            self.draft.email = email.into();
        }
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        if !self.draft.is_loading {
            self.draft.password = password.into();
        }
    }

    pub fn set_experience_level(&mut self, level: ExperienceLevel) {
        if !self.draft.is_loading {
            self.draft.experience_level = level;
        }
    }

    /// Validate the draft and enter `Submitting`.
    ///
    /// Clears any prior error first. Invalid input is shown as the draft's
    /// error and never produces a request.
    ///
    /// # Errors
    ///
    /// [`SubmitBlocked`] when closed, already submitting, or invalid.
    pub fn begin_submit(&mut self) -> Result<PendingSubmit, SubmitBlocked> {
        if !self.open {
            return Err(SubmitBlocked::Closed);
        }
        if self.draft.is_loading {
            return Err(SubmitBlocked::InFlight);
        }
        self.draft.error = None;

        let request = match self.validated_request() {
            Ok(request) => request,
            Err(err) => {
                self.draft.error = Some(err.user_message());
                return Err(SubmitBlocked::Invalid(err));
            }
        };
        self.draft.is_loading = true;
        Ok(PendingSubmit { generation: self.generation, request })
    }

    /// Apply the Auth API's answer to `pending`.
    ///
    /// The outcome is returned even when the draft has since been closed or
    /// replaced; only the draft update is skipped in that case. A successful
    /// login leaves the modal open: the caller closes it once the reader has
    /// been told.
    pub fn finish_submit(&mut self, pending: &PendingSubmit, result: Result<(), AuthError>) -> SubmitOutcome {
        self.draft.is_loading = false;
        let outcome = SubmitOutcome::of(pending.request.mode(), &result);
        if self.open && pending.generation == self.generation {
            match &outcome {
                SubmitOutcome::LoggedIn => {}
                SubmitOutcome::SignedUp => {
                    self.draft.mode = AuthMode::Login;
                    self.draft.password.clear();
                }
                SubmitOutcome::Failed(message) => self.draft.error = Some(message.clone()),
            }
        }
        outcome
    }

    fn validated_request(&self) -> Result<SubmitRequest, AuthError> {
        let email = validate_email(&self.draft.email)?;
        validate_password(&self.draft.password)?;
        let password = self.draft.password.clone();
        Ok(match self.draft.mode {
            AuthMode::Login => SubmitRequest::Login(Credentials { email, password }),
            AuthMode::Signup => SubmitRequest::Signup(SignupProfile {
                email,
                password,
                experience_level: self.draft.experience_level,
            }),
        })
    }
}

impl AsRef<AuthModalState> for AuthModalState {
    fn as_ref(&self) -> &AuthModalState {
        self
    }
}

impl AsMut<AuthModalState> for AuthModalState {
    fn as_mut(&mut self) -> &mut AuthModalState {
        self
    }
}

/// Trim `raw` and check it has a basic `local@domain` shape.
///
/// # Errors
///
/// A validation error naming the problem.
pub fn validate_email(raw: &str) -> Result<String, AuthError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(AuthError::validation("Please enter your email address."));
    }
    if !is_basic_email(email) {
        return Err(AuthError::validation("Please enter a valid email address."));
    }
    Ok(email.to_owned())
}

/// # Errors
///
/// A validation error when the password is empty.
pub fn validate_password(raw: &str) -> Result<(), AuthError> {
    if raw.is_empty() {
        return Err(AuthError::validation("Please enter your password."));
    }
    Ok(())
}

fn is_basic_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain.split('.').all(|label| !label.is_empty())
}
