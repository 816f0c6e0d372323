use super::*;

fn sample_session() -> Session {
    Session { token: "abc".to_owned(), user: serde_json::json!({ "name": "Ada", "email": "ada@example.com" }) }
}

#[test]
fn memory_store_starts_empty() {
    let store = MemorySessionStore::new();
    assert_eq!(store.load().unwrap(), None);
    assert_eq!(store.writes(), 0);
}

#[test]
fn memory_store_clones_share_state() {
    let store = MemorySessionStore::new();
    let observer = store.clone();
    store.save(&sample_session()).unwrap();
    assert_eq!(observer.load().unwrap().map(|s| s.token), Some("abc".to_owned()));
    assert_eq!(observer.writes(), 1);
}

#[test]
fn clear_removes_session_but_keeps_write_count() {
    let store = MemorySessionStore::new();
    store.save(&sample_session()).unwrap();
    store.clear().unwrap();
    assert_eq!(store.load().unwrap(), None);
    assert_eq!(store.writes(), 1);
}

#[test]
fn session_from_auth_response() {
    let resp = AuthResponse { token: "t1".to_owned(), user: serde_json::json!({ "id": 7 }) };
    let session = Session::from(resp);
    assert_eq!(session.token, "t1");
    assert_eq!(session.user["id"], 7);
}

#[test]
fn display_name_prefers_name_then_email() {
    assert_eq!(sample_session().display_name(), Some("Ada"));
    let email_only = Session { token: "t".to_owned(), user: serde_json::json!({ "email": "x@y.com" }) };
    assert_eq!(email_only.display_name(), Some("x@y.com"));
    let opaque = Session { token: "t".to_owned(), user: serde_json::Value::Null };
    assert_eq!(opaque.display_name(), None);
}
