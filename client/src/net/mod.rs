//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the `authflow::AuthApi` transport over browser `fetch`.

pub mod api;
