//! Browser localStorage helpers for the admin session.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize csr-only read/write behavior so the session gate,
//! login page, and logout link share one set of keys. Native builds behave as
//! if storage were empty.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

#[cfg_attr(not(feature = "csr"), allow(unused_imports))]
use crate::config::{TOKEN_STORAGE_KEY, USER_ID_STORAGE_KEY};
use crate::net::types::LoginResponse;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the stored bearer token, if any.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        local_storage()?.get_item(TOKEN_STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Persist a successful login. Returns `false` when the token could not be
/// written, in which case the admin UI would not appear after a reload.
pub fn store_session(login: &LoginResponse) -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = local_storage() else {
            leptos::logging::warn!("localStorage unavailable; session not stored");
            return false;
        };
        if let Some(user_id) = login.user_id {
            let _ = storage.set_item(USER_ID_STORAGE_KEY, &user_id.to_string());
        }
        if storage.set_item(TOKEN_STORAGE_KEY, &login.token).is_err() {
            leptos::logging::warn!("token write to localStorage failed");
            return false;
        }
        true
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = login;
        false
    }
}

/// Remove every session key.
pub fn clear_session() {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
            let _ = storage.remove_item(USER_ID_STORAGE_KEY);
        }
    }
}
