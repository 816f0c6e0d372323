use super::*;

const EVERY: [Route; 5] = [Route::Landing, Route::Login, Route::Signup, Route::Home, Route::ForgotPassword];

#[test]
fn segment_is_path_without_leading_slash() {
    for route in EVERY {
        assert_eq!(format!("/{}", route.segment()), route.path());
    }
}

#[test]
fn landing_segment_is_empty() {
    assert_eq!(Route::Landing.segment(), "");
    assert_eq!(Route::Home.segment(), "home");
}

#[test]
fn forgot_password_path_matches_login_link() {
    assert_eq!(Route::ForgotPassword.path(), "/forgot-password");
}
