//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome and form inputs while reading/writing shared
//! state from Leptos context providers or props.

pub mod footer;
pub mod form_field;
pub mod navbar;
