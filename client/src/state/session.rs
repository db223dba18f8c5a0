//! Session store: the single source of truth for "is the reader signed in".
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages are pre-rendered without any knowledge of the visitor, so the store
//! starts signed out and learns the truth once, at hydration, from the
//! persisted token. After that only `login()`/`logout()` change it; storage
//! events from other tabs are not observed.
//!
//! DESIGN
//! ======
//! The store is a plain object created by the application root and handed
//! to the UI through `AuthProvider`. State changes are pushed to subscribers
//! synchronously; the provider's subscriber mirrors them into a signal so
//! every session-aware component re-renders.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::util::token_storage::TokenStorage;

/// Client-visible session state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub is_logged_in: bool,
}

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Arc<dyn Fn(Session) + Send + Sync>;

#[derive(Default)]
struct Inner {
    session: Session,
    hydrated: bool,
}

pub struct SessionStore {
    storage: Arc<dyn TokenStorage>,
    inner: Mutex<Inner>,
    subscribers: Mutex<Vec<(SubscriptionId, Subscriber)>>,
    next_id: AtomicU64,
}

impl SessionStore {
    /// A signed-out, not yet hydrated store reading from `storage`.
    pub fn new(storage: Arc<dyn TokenStorage>) -> Self {
        Self {
            storage,
            inner: Mutex::new(Inner::default()),
            subscribers: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn session(&self) -> Session {
        self.inner().session
    }

    pub fn is_logged_in(&self) -> bool {
        self.session().is_logged_in
    }

    pub fn is_hydrated(&self) -> bool {
        self.inner().hydrated
    }

    /// Read the persisted token once and adopt its presence as the session.
    ///
    /// Later calls return the current session without touching storage.
    pub fn hydrate(&self) -> Session {
        let session = {
            let mut inner = self.inner();
            if inner.hydrated {
                return inner.session;
            }
            inner.hydrated = true;
            inner.session.is_logged_in = self.storage.has_token();
            inner.session
        };
        log::debug!("session hydrated: logged_in={}", session.is_logged_in);
        self.notify(session);
        session
    }

    /// Mark the session active. The caller has already obtained a token.
    pub fn login(&self) {
        self.set_logged_in(true);
    }

    /// Remove the persisted token and mark the session inactive.
    pub fn logout(&self) {
        self.storage.clear_token();
        self.set_logged_in(false);
        log::info!("logged out");
    }

    /// Register `f` to receive every session change.
    pub fn subscribe(&self, f: impl Fn(Session) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.subscribers().push((id, Arc::new(f)));
        id
    }

    /// Returns whether `id` was registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers();
        let before = subscribers.len();
        subscribers.retain(|(sid, _)| *sid != id);
        subscribers.len() != before
    }

    #[cfg(test)]
    pub(crate) fn subscriber_count(&self) -> usize {
        self.subscribers().len()
    }

    fn set_logged_in(&self, is_logged_in: bool) {
        let session = {
            let mut inner = self.inner();
            inner.session.is_logged_in = is_logged_in;
            inner.session
        };
        self.notify(session);
    }

    // Subscribers run with no lock held so they may read the store.
    fn notify(&self, session: Session) {
        let subscribers: Vec<Subscriber> = self.subscribers().iter().map(|(_, f)| Arc::clone(f)).collect();
        for f in subscribers {
            f(session);
        }
    }

    fn inner(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn subscribers(&self) -> MutexGuard<'_, Vec<(SubscriptionId, Subscriber)>> {
        self.subscribers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner();
        f.debug_struct("SessionStore")
            .field("session", &inner.session)
            .field("hydrated", &inner.hydrated)
            .finish_non_exhaustive()
    }
}
