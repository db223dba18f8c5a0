use super::*;

#[test]
fn memory_storage_starts_empty() {
    let storage = MemoryTokenStorage::new();
    assert_eq!(storage.read_token(), None);
    assert!(!storage.has_token());
}

#[test]
fn memory_storage_write_then_clear() {
    let storage = MemoryTokenStorage::new();
    storage.write_token("abc.def.ghi");
    assert_eq!(storage.read_token().as_deref(), Some("abc.def.ghi"));
    storage.clear_token();
    assert!(!storage.has_token());
}

#[test]
fn memory_storage_clones_share_the_token() {
    let storage = MemoryTokenStorage::new();
    let other = storage.clone();
    other.write_token("shared");
    assert!(storage.has_token());
}

#[test]
fn empty_token_does_not_count_as_present() {
    let storage = MemoryTokenStorage::with_token("");
    assert!(!storage.has_token());
}

#[test]
fn noop_storage_ignores_writes() {
    let storage = NoopTokenStorage;
    storage.write_token("ignored");
    assert_eq!(storage.read_token(), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_build_selects_noop_storage() {
    let storage = for_environment();
    storage.write_token("ignored");
    assert!(!storage.has_token());
}
