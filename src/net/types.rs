//! Wire DTOs for the portfolio API.
//!
//! DESIGN
//! ======
//! Field names follow the API's camelCase JSON. Extra fields the server sends
//! (`userId`, nested `category`) are ignored on decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A single portfolio entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Work {
    pub id: i64,
    pub title: String,
    pub image_url: String,
    pub category_id: i64,
}

/// A named grouping used to filter works.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Body of `POST /users/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful login response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub user_id: Option<i64>,
    pub token: String,
}

/// Validated text fields of a new work; the image payload travels separately.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewWork {
    pub title: String,
    pub category_id: i64,
}

/// Raw image handed to the multipart upload.
#[cfg(feature = "csr")]
pub type ImageBlob = web_sys::File;

/// Raw image handed to the multipart upload.
#[cfg(not(feature = "csr"))]
pub type ImageBlob = Vec<u8>;
