//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render gallery chrome and the admin modal while reading/writing
//! page-owned signals and the shared session/notice contexts.

pub mod edit_banner;
pub mod edit_modal;
pub mod filter_bar;
pub mod gallery_grid;
pub mod notice_banner;
pub mod site_header;
