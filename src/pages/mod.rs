//! The two routes: the public gallery at `/` and the admin login at `/login`.
//!
//! ARCHITECTURE
//! ============
//! The gallery page owns the gallery and modal stores and kicks off the first
//! fetch; the login page only needs the API and session storage.

pub mod gallery;
pub mod login;
