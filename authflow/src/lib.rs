//! # authflow
//!
//! Shared signup/login workflow for DeepCheck. Holds everything that does not
//! need a browser: form values, validation, the per-form submission state
//! machine, the remote auth contract, and the session store contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Leptos `client` crate and the `cli` crate both drive the same
//! [`FormController`]; each supplies its own [`AuthApi`] transport and
//! [`SessionStore`] backend.

pub mod analysis;
pub mod api;
pub mod controller;
pub mod errors;
pub mod field;
pub mod flow;
pub mod routes;
pub mod session;
pub mod validate;
pub mod values;

pub use api::{AuthApi, AuthResponse, RemoteFailure};
pub use controller::{FormController, SubmissionState, SubmitError};
pub use errors::FormErrors;
pub use field::Field;
pub use flow::LoginOutcome;
pub use routes::Route;
pub use session::{MemorySessionStore, Session, SessionError, SessionStore};
pub use values::{Form, LoginFormValues, SignupFormValues};
