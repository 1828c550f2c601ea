//! Admin session gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! The stored bearer token's presence, not its validity, selects the admin
//! experience. The API remains the authority on whether the token is accepted.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::storage;

/// Which page chrome the gallery renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Experience {
    /// Read-only: filter bar, no edit controls.
    Visitor,
    /// Edit banner and edit entry point, no filter bar.
    Admin,
}

impl Experience {
    pub fn shows_filter_bar(self) -> bool {
        matches!(self, Self::Visitor)
    }

    pub fn shows_edit_entry(self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// Session snapshot taken once per page load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    token: Option<String>,
}

impl SessionState {
    /// Build a session from a stored value; an empty string counts as absent.
    pub fn from_token(token: Option<String>) -> Self {
        Self { token: token.filter(|t| !t.is_empty()) }
    }

    /// Read the token from localStorage.
    pub fn load() -> Self {
        Self::from_token(storage::read_token())
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_admin(&self) -> bool {
        self.token.is_some()
    }

    pub fn experience(&self) -> Experience {
        if self.is_admin() { Experience::Admin } else { Experience::Visitor }
    }
}

/// `true` iff a token is currently stored.
pub fn is_admin() -> bool {
    SessionState::load().is_admin()
}
