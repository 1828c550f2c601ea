//! Gallery workflows and the browser glue they lean on.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gallery_actions` runs the fetch and write flows against any API; `storage`
//! and `image_preview` hold the localStorage and `blob:` URL calls, which are
//! no-ops outside the browser.

pub mod gallery_actions;
pub mod image_preview;
pub mod storage;
