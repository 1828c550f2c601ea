//! REST API helpers for communicating with the portfolio server.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: `HttpApi` returns `ApiError::Unavailable` so state and
//! workflow code can compile and be tested without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call yields `Result<_, ApiError>`. Non-2xx responses are reported as
//! `ApiError::Status` without further discrimination; callers decide whether
//! the failure is surfaced or only logged.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Category, Credentials, ImageBlob, LoginResponse, NewWork, Work};
use crate::error::ApiError;

/// Operations the gallery needs from the portfolio API.
///
/// `HttpApi` is the only production implementation; workflow tests supply
/// in-memory doubles.
#[allow(async_fn_in_trait)]
pub trait PortfolioApi {
    /// `GET /works`.
    async fn list_works(&self) -> Result<Vec<Work>, ApiError>;

    /// `GET /categories`.
    async fn list_categories(&self) -> Result<Vec<Category>, ApiError>;

    /// `DELETE /works/{id}` with a bearer token.
    async fn delete_work(&self, token: &str, id: i64) -> Result<(), ApiError>;

    /// Multipart `POST /works` with a bearer token.
    async fn create_work(&self, token: &str, work: &NewWork, image: &ImageBlob) -> Result<(), ApiError>;

    /// `POST /users/login`.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;
}

/// Map an HTTP status to success or a generic status failure.
#[cfg(any(test, feature = "csr"))]
fn status_result(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status(status))
    }
}

/// Multipart field values for a new work, in upload order.
#[cfg(any(test, feature = "csr"))]
fn multipart_text_fields(work: &NewWork) -> [(&'static str, String); 2] {
    [("title", work.title.clone()), ("category", work.category_id.to_string())]
}

/// `gloo-net` implementation against [`crate::config::API_BASE`].
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpApi;

#[cfg(feature = "csr")]
fn transport(e: impl std::fmt::Display) -> ApiError {
    ApiError::Transport(e.to_string())
}

#[cfg(feature = "csr")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url).send().await.map_err(transport)?;
    status_result(resp.status())?;
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

impl PortfolioApi for HttpApi {
    async fn list_works(&self) -> Result<Vec<Work>, ApiError> {
        #[cfg(feature = "csr")]
        {
            get_json(&crate::config::works_url()).await
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        #[cfg(feature = "csr")]
        {
            get_json(&crate::config::categories_url()).await
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn delete_work(&self, token: &str, id: i64) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::delete(&crate::config::work_url(id))
                .header("accept", "*/*")
                .header("Authorization", &crate::config::bearer(token))
                .send()
                .await
                .map_err(transport)?;
            status_result(resp.status())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, id);
            Err(ApiError::Unavailable)
        }
    }

    async fn create_work(&self, token: &str, work: &NewWork, image: &ImageBlob) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let js_err = |e: wasm_bindgen::JsValue| ApiError::Transport(format!("{e:?}"));
            let form = web_sys::FormData::new().map_err(js_err)?;
            for (name, value) in multipart_text_fields(work) {
                form.append_with_str(name, &value).map_err(js_err)?;
            }
            form.append_with_blob_and_filename("image", image, &image.name())
                .map_err(js_err)?;

            let resp = gloo_net::http::Request::post(&crate::config::works_url())
                .header("accept", "*/*")
                .header("Authorization", &crate::config::bearer(token))
                .body(form)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            status_result(resp.status())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, work, image);
            Err(ApiError::Unavailable)
        }
    }

    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&crate::config::login_url())
                .json(credentials)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            status_result(resp.status())?;
            resp.json::<LoginResponse>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
            Err(ApiError::Unavailable)
        }
    }
}
