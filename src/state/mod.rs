//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`gallery`, `session`, `edit_modal`, etc.) so
//! components depend on small focused models. Every transition is a plain
//! method on a plain struct; pages wrap them in signals.

pub mod add_work;
pub mod edit_modal;
pub mod gallery;
pub mod notice;
pub mod session;
