use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

static NEXT: AtomicUsize = AtomicUsize::new(0);

fn scratch_store() -> FileSessionStore {
    let n = NEXT.fetch_add(1, Ordering::Relaxed);
    let path = std::env::temp_dir().join(format!("deepcheck-session-{}-{n}.json", std::process::id()));
    let _ = std::fs::remove_file(&path);
    FileSessionStore::new(path)
}

fn sample() -> Session {
    Session { token: "abc".to_owned(), user: serde_json::json!({ "name": "Ada" }) }
}

#[test]
fn missing_file_loads_as_none() {
    let store = scratch_store();
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn saved_session_reads_back() {
    let store = scratch_store();
    store.save(&sample()).unwrap();
    assert_eq!(store.load().unwrap(), Some(sample()));
    store.clear().unwrap();
}

#[test]
fn garbage_file_is_malformed() {
    let store = scratch_store();
    std::fs::write(store.path(), "not json").unwrap();
    assert!(matches!(store.load(), Err(SessionError::Malformed(_))));
    store.clear().unwrap();
}

#[test]
fn clear_is_idempotent() {
    let store = scratch_store();
    store.save(&sample()).unwrap();
    store.clear().unwrap();
    store.clear().unwrap();
    assert_eq!(store.load().unwrap(), None);
}
