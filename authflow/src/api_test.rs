use super::*;

#[test]
fn urls_join_base_and_path() {
    assert_eq!(signup_url("http://localhost:5000"), "http://localhost:5000/api/signup");
    assert_eq!(login_url("https://auth.example.test/"), "https://auth.example.test/api/login");
}

#[test]
fn blank_base_url_uses_default() {
    assert_eq!(normalize_base_url("  "), DEFAULT_API_URL);
    assert_eq!(login_url(""), "http://localhost:5000/api/login");
}

#[test]
fn error_body_message_extracted() {
    assert_eq!(
        ErrorBody::message_from(r#"{"message":"Invalid login credentials"}"#).as_deref(),
        Some("Invalid login credentials")
    );
}

#[test]
fn error_body_without_message_or_json_yields_none() {
    assert_eq!(ErrorBody::message_from(r#"{"error":"nope"}"#), None);
    assert_eq!(ErrorBody::message_from("<html>502</html>"), None);
    assert_eq!(ErrorBody::message_from(r#"{"message":""}"#), None);
    assert_eq!(ErrorBody::message_from(r#"{"message":null}"#), None);
}

#[test]
fn rejected_keeps_server_message() {
    let failure = RemoteFailure::rejected(409, r#"{"message":"Email already registered"}"#);
    assert_eq!(failure.server_message(), Some("Email already registered"));
    assert_eq!(failure.display_message("Signup failed"), "Email already registered");
}

#[test]
fn network_failure_uses_fallback() {
    let failure = RemoteFailure::Network("connection refused".to_owned());
    assert_eq!(failure.display_message("Invalid login credentials"), "Invalid login credentials");
}

#[test]
fn rejected_without_message_uses_fallback() {
    let failure = RemoteFailure::rejected(500, "");
    assert_eq!(failure.display_message("Signup failed"), "Signup failed");
    assert_eq!(failure.to_string(), "request rejected: status 500");
}

#[test]
fn auth_response_user_defaults_to_null() {
    let resp: AuthResponse = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
    assert_eq!(resp.token, "abc");
    assert!(resp.user.is_null());
}

#[test]
fn auth_response_requires_token() {
    assert!(serde_json::from_str::<AuthResponse>(r#"{"user":{}}"#).is_err());
}

#[test]
fn whitespace_message_is_still_shown() {
    assert_eq!(ErrorBody::message_from(r#"{"message":"  "}"#).as_deref(), Some("  "));
}

#[test]
fn scalar_messages_are_stringified() {
    assert_eq!(ErrorBody::message_from(r#"{"message":42}"#).as_deref(), Some("42"));
    assert_eq!(ErrorBody::message_from(r#"{"message":true}"#).as_deref(), Some("true"));
    assert_eq!(ErrorBody::message_from(r#"{"message":0}"#), None);
    assert_eq!(ErrorBody::message_from(r#"{"message":false}"#), None);
}

#[test]
fn numeric_message_survives_rejection() {
    let failure = RemoteFailure::rejected(400, r#"{"message":42}"#);
    assert_eq!(failure.display_message("Signup failed"), "42");
}
