//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod detect;
pub(crate) mod form_bindings;
pub mod landing;
pub mod login;
pub mod not_found;
pub mod signup;
