use super::*;

// =============================================================
// SessionState defaults
// =============================================================

#[test]
fn session_state_default_not_loaded() {
    let state = SessionState::default();
    assert!(!state.loaded);
    assert!(!state.is_authenticated());
    assert_eq!(state.display_name(), None);
}

#[test]
fn restored_marks_loaded_even_without_session() {
    let state = SessionState::restored(None);
    assert!(state.loaded);
    assert!(!state.is_authenticated());
}

#[test]
fn display_name_falls_back_to_account() {
    let state = SessionState::restored(Some(Session { token: "t".to_owned(), user: serde_json::json!({}) }));
    assert!(state.is_authenticated());
    assert_eq!(state.display_name().as_deref(), Some("Account"));
}

#[test]
fn display_name_uses_user_record() {
    let state = SessionState::restored(Some(Session {
        token: "t".to_owned(),
        user: serde_json::json!({ "name": "Ada" }),
    }));
    assert_eq!(state.display_name().as_deref(), Some("Ada"));
}
