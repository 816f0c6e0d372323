use super::*;

#[test]
fn default_is_empty() {
    let errors = FormErrors::default();
    assert!(errors.is_empty());
    assert_eq!(errors.get(Field::Email), None);
}

#[test]
fn insert_replaces_existing_message() {
    let mut errors = FormErrors::new();
    errors.insert(Field::Email, "Email is required");
    errors.insert(Field::Email, "Email is invalid");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(Field::Email), Some("Email is invalid"));
}

#[test]
fn remove_clears_single_field() {
    let mut errors = FormErrors::new();
    errors.insert(Field::Name, "Name is required");
    errors.insert(Field::Password, "Password is required");
    assert_eq!(errors.remove(Field::Name).as_deref(), Some("Name is required"));
    assert!(!errors.contains(Field::Name));
    assert!(errors.contains(Field::Password));
}

#[test]
fn iter_follows_field_order() {
    let errors: FormErrors = [
        (Field::ConfirmPassword, "Passwords do not match".to_owned()),
        (Field::Name, "Name is required".to_owned()),
    ]
    .into_iter()
    .collect();
    let fields: Vec<Field> = errors.iter().map(|(f, _)| f).collect();
    assert_eq!(fields, vec![Field::Name, Field::ConfirmPassword]);
}
