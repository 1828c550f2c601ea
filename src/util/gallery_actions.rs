//! Async gallery workflows over any [`PortfolioApi`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages spawn these procedures and then fold the returned outcome into their
//! signals with the `apply_*` helpers. Keeping the await and the state update
//! apart lets tests drive whole flows against an in-memory API.
//!
//! ERROR HANDLING
//! ==============
//! Read failures are returned for the caller to surface as a notice, including
//! the gallery re-fetch that follows a successful write. Write failures are
//! logged here; only create failures reach the user.

#[cfg(test)]
#[path = "gallery_actions_test.rs"]
mod gallery_actions_test;

use crate::error::ApiError;
use crate::net::api::PortfolioApi;
use crate::net::types::{Category, Credentials, ImageBlob, LoginResponse, NewWork, Work};
use crate::state::edit_modal::EditModalState;
use crate::state::gallery::GalleryState;
use crate::state::notice::{NoticeKind, NoticeState};

pub const CREATED_MESSAGE: &str = "Le projet a été ajouté avec succès !";
pub const SUBMIT_FAILED_MESSAGE: &str = "Une erreur est survenue lors de l'envoi du formulaire";
pub const LOAD_FAILED_MESSAGE: &str = "Impossible de charger les projets";

/// Results of the initial page fetch.
#[derive(Debug)]
pub struct GalleryLoad {
    pub works: Result<Vec<Work>, ApiError>,
    pub categories: Result<Vec<Category>, ApiError>,
}

/// Result of a write plus the gallery re-fetch it triggered on success.
#[derive(Debug)]
pub struct WriteOutcome {
    pub result: Result<(), ApiError>,
    pub refreshed: Option<Result<Vec<Work>, ApiError>>,
}

// =============================================================================
// FETCH
// =============================================================================

pub async fn load_gallery<A: PortfolioApi>(api: &A) -> GalleryLoad {
    let works = fetch_works(api).await;
    let categories = api.list_categories().await;
    if let Err(e) = &categories {
        leptos::logging::warn!("category fetch failed: {} {e}", e.error_code());
    }
    GalleryLoad { works, categories }
}

pub async fn fetch_works<A: PortfolioApi>(api: &A) -> Result<Vec<Work>, ApiError> {
    let result = api.list_works().await;
    if let Err(e) = &result {
        leptos::logging::warn!("works fetch failed: {} {e}", e.error_code());
    }
    result
}

/// Fold the initial fetch into gallery state; any failure raises a notice.
pub fn apply_load(gallery: &mut GalleryState, notice: &mut NoticeState, load: GalleryLoad) {
    let failed = load.works.is_err() || load.categories.is_err();
    gallery.apply_works(load.works);
    gallery.apply_categories(load.categories);
    if failed {
        notice.push(NoticeKind::Error, LOAD_FAILED_MESSAGE);
    }
}

// =============================================================================
// WRITES
// =============================================================================

pub async fn delete_work<A: PortfolioApi>(api: &A, token: &str, id: i64) -> WriteOutcome {
    let result = api.delete_work(token, id).await;
    let refreshed = match &result {
        Ok(()) => Some(fetch_works(api).await),
        Err(e) => {
            leptos::logging::error!("an error occurred during photo deletion: work={id} {} {e}", e.error_code());
            None
        }
    };
    WriteOutcome { result, refreshed }
}

pub async fn submit_work<A: PortfolioApi>(api: &A, token: &str, work: &NewWork, image: &ImageBlob) -> WriteOutcome {
    let result = api.create_work(token, work, image).await;
    let refreshed = match &result {
        Ok(()) => Some(fetch_works(api).await),
        Err(e) => {
            leptos::logging::error!("work submission failed: {} {e}", e.error_code());
            None
        }
    };
    WriteOutcome { result, refreshed }
}

/// Fold a post-write re-fetch into the gallery. A failed re-fetch leaves the
/// stale list on screen, so it raises the load notice.
fn apply_refresh(gallery: &mut GalleryState, notice: &mut NoticeState, refreshed: Option<Result<Vec<Work>, ApiError>>) {
    let Some(refreshed) = refreshed else {
        return;
    };
    if refreshed.is_err() {
        notice.push(NoticeKind::Error, LOAD_FAILED_MESSAGE);
    }
    gallery.apply_works(refreshed);
}

/// Fold a delete outcome into the modal and gallery. A failed delete is
/// silent; a failed re-fetch after it is not.
pub fn apply_delete(
    modal: &mut EditModalState,
    gallery: &mut GalleryState,
    notice: &mut NoticeState,
    id: i64,
    outcome: WriteOutcome,
) {
    modal.apply_delete(id, &outcome.result);
    apply_refresh(gallery, notice, outcome.refreshed);
}

/// Fold a create outcome into the modal, gallery, and notice banner.
pub fn apply_submit(
    modal: &mut EditModalState,
    gallery: &mut GalleryState,
    notice: &mut NoticeState,
    outcome: WriteOutcome,
) {
    modal.apply_submit(&outcome.result);
    match outcome.result {
        Ok(()) => {
            notice.push(NoticeKind::Info, CREATED_MESSAGE);
        }
        Err(_) => {
            notice.push(NoticeKind::Error, SUBMIT_FAILED_MESSAGE);
        }
    }
    apply_refresh(gallery, notice, outcome.refreshed);
}

// =============================================================================
// LOGIN
// =============================================================================

pub async fn login<A: PortfolioApi>(api: &A, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
    let result = api.login(credentials).await;
    if let Err(e) = &result {
        leptos::logging::warn!("login failed: {} {e}", e.error_code());
    }
    result
}
