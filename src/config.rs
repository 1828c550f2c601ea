//! Compile-time configuration for the gallery client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API base URL is fixed; every endpoint path is derived here so network
//! code and tests agree on the exact wire locations.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL of the portfolio REST API.
pub const API_BASE: &str = "http://localhost:5678/api";

/// localStorage key holding the admin bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// localStorage key holding the id of the logged-in user.
pub const USER_ID_STORAGE_KEY: &str = "userId";

/// File extensions accepted by the add-work image field.
pub const ACCEPTED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Value of the image input's `accept` attribute.
pub const IMAGE_ACCEPT_ATTR: &str = ".jpg, .jpeg, .png";

/// Upper bound on uploaded image size (4 MB).
pub const MAX_IMAGE_BYTES: u64 = 4 * 1024 * 1024;

/// How long a notice stays on screen before it is dismissed.
pub const NOTICE_TIMEOUT_MS: u32 = 4_000;

/// Label of the implicit filter that matches every category.
pub const ALL_FILTER_LABEL: &str = "Tous";

pub fn works_url() -> String {
    format!("{API_BASE}/works")
}

pub fn work_url(id: i64) -> String {
    format!("{API_BASE}/works/{id}")
}

pub fn categories_url() -> String {
    format!("{API_BASE}/categories")
}

pub fn login_url() -> String {
    format!("{API_BASE}/users/login")
}

/// Format an `Authorization` header value for `token`.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
