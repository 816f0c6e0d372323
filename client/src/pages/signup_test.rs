use super::*;

#[test]
fn submit_label_reflects_in_flight_request() {
    assert_eq!(submit_label(false), "Sign Up");
    assert_eq!(submit_label(true), "Signing up...");
}

#[test]
fn signup_renders_every_field_in_order() {
    let keys: Vec<&str> = SignupFormValues::FIELDS.iter().map(|f| f.key()).collect();
    assert_eq!(keys, ["name", "email", "password", "confirmPassword"]);
}
