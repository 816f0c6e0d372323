//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Form state is page-local (`authflow::FormController` inside a signal).
//! Only state that outlives a page lives here and is provided via context.

pub mod detect;
pub mod session;
