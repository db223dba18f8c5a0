use std::sync::atomic::AtomicUsize;

use super::*;
use crate::util::token_storage::{MemoryTokenStorage, NoopTokenStorage};

fn store_with(storage: &MemoryTokenStorage) -> SessionStore {
    SessionStore::new(Arc::new(storage.clone()))
}

// =============================================================
// Hydration
// =============================================================

#[test]
fn fresh_store_is_logged_out_even_with_token() {
    let storage = MemoryTokenStorage::with_token("jwt");
    let store = store_with(&storage);
    assert!(!store.is_logged_in());
    assert!(!store.is_hydrated());
}

#[test]
fn hydrate_adopts_token_presence() {
    let with_token = store_with(&MemoryTokenStorage::with_token("jwt"));
    assert!(with_token.hydrate().is_logged_in);
    assert!(with_token.is_logged_in());

    let without_token = store_with(&MemoryTokenStorage::new());
    assert!(!without_token.hydrate().is_logged_in);
    assert!(without_token.is_hydrated());
}

#[test]
fn hydrate_runs_once() {
    let storage = MemoryTokenStorage::new();
    let store = store_with(&storage);
    store.hydrate();
    storage.write_token("written later in another tab");
    assert!(!store.hydrate().is_logged_in);
}

#[test]
fn hydrate_with_noop_storage_stays_logged_out() {
    let store = SessionStore::new(Arc::new(NoopTokenStorage));
    assert!(!store.hydrate().is_logged_in);
}

// =============================================================
// login / logout
// =============================================================

#[test]
fn login_marks_active_without_writing_token() {
    let storage = MemoryTokenStorage::new();
    let store = store_with(&storage);
    store.login();
    assert!(store.is_logged_in());
    assert!(!storage.has_token());
}

#[test]
fn logout_clears_token_and_flag() {
    let storage = MemoryTokenStorage::with_token("jwt");
    let store = store_with(&storage);
    store.hydrate();
    store.logout();
    assert!(!store.is_logged_in());
    assert!(!storage.has_token());
}

#[test]
fn fresh_mount_after_logout_hydrates_logged_out() {
    let storage = MemoryTokenStorage::with_token("jwt");
    let first = store_with(&storage);
    assert!(first.hydrate().is_logged_in);
    first.logout();

    let second = store_with(&storage);
    assert!(!second.hydrate().is_logged_in);
}

// =============================================================
// Subscribers
// =============================================================

#[test]
fn subscribers_receive_every_change() {
    let store = store_with(&MemoryTokenStorage::with_token("jwt"));
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    store.subscribe(move |s| sink.lock().unwrap().push(s.is_logged_in));

    store.hydrate();
    store.logout();
    store.login();

    assert_eq!(*seen.lock().unwrap(), vec![true, false, true]);
}

#[test]
fn repeated_hydrate_does_not_notify() {
    let store = store_with(&MemoryTokenStorage::new());
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    store.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    store.hydrate();
    store.hydrate();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn unsubscribe_stops_delivery() {
    let store = store_with(&MemoryTokenStorage::new());
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let id = store.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    store.login();
    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.logout();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn subscriber_may_read_the_store() {
    let store = Arc::new(store_with(&MemoryTokenStorage::new()));
    let observed = Arc::new(Mutex::new(None));
    let (reader, sink) = (Arc::clone(&store), Arc::clone(&observed));
    store.subscribe(move |_| *sink.lock().unwrap() = Some(reader.is_logged_in()));
    store.login();
    assert_eq!(*observed.lock().unwrap(), Some(true));
}
