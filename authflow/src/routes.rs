//! Route table for the web app.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Every path the app links to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Landing,
    Login,
    Signup,
    /// Authenticated landing page (the detection upload screen).
    Home,
    /// Linked from the login form; no page is mounted for it.
    ForgotPassword,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Home => "/home",
            Self::ForgotPassword => "/forgot-password",
        }
    }

    /// Path without the leading slash, as the router's static segment.
    pub fn segment(self) -> &'static str {
        &self.path()[1..]
    }
}
