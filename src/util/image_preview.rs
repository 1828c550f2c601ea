//! Object-URL previews for picked image files.
//!
//! Requires a browser environment; native builds never produce a preview.

use crate::net::types::ImageBlob;

/// Create a `blob:` URL showing `image`.
pub fn create(image: &ImageBlob) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        web_sys::Url::create_object_url_with_blob(image).ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = image;
        None
    }
}

/// Release a URL returned by [`create`].
pub fn revoke(url: &str) {
    #[cfg(feature = "csr")]
    {
        let _ = web_sys::Url::revoke_object_url(url);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
    }
}
