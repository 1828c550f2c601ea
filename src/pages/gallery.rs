//! Portfolio page: gallery, visitor filters, and the admin edit entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns the gallery and modal stores. It fetches works and
//! categories once on mount, then branches on the session: visitors get the
//! filter bar, admins get the edit banner and "modifier" button.

use leptos::prelude::*;

use crate::components::edit_banner::EditBanner;
use crate::components::edit_modal::EditModal;
use crate::components::filter_bar::FilterBar;
use crate::components::gallery_grid::GalleryGrid;
use crate::components::site_header::SiteHeader;
#[cfg(feature = "csr")]
use crate::net::api::HttpApi;
use crate::state::edit_modal::EditModalState;
use crate::state::gallery::GalleryState;
use crate::state::notice::NoticeState;
use crate::state::session::SessionState;
#[cfg(feature = "csr")]
use crate::util::gallery_actions;

#[component]
pub fn GalleryPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notice = expect_context::<RwSignal<NoticeState>>();
    let gallery = RwSignal::new(GalleryState::default());
    let modal = RwSignal::new(EditModalState::default());

    gallery.update(GalleryState::begin_load);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let load = gallery_actions::load_gallery(&HttpApi).await;
        let (Some(mut g), Some(mut n)) = (gallery.try_get_untracked(), notice.try_get_untracked()) else {
            return;
        };
        gallery_actions::apply_load(&mut g, &mut n, load);
        gallery.set(g);
        notice.set(n);
    });

    #[cfg(not(feature = "csr"))]
    {
        let _ = notice;
    }

    let on_edit = move |_| {
        if !modal.try_update(EditModalState::open).unwrap_or(false) {
            return;
        }
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let works = gallery_actions::fetch_works(&HttpApi).await;
            modal.try_update(|m| m.apply_works(works));
        });
    };

    let experience = move || session.with(SessionState::experience);

    view! {
        <Show when=move || experience().shows_edit_entry()>
            <EditBanner/>
        </Show>
        <SiteHeader/>
        <main>
            <section id="portfolio">
                <header>
                    <h2>"Mes Projets"</h2>
                    <Show when=move || experience().shows_edit_entry()>
                        <button class="edit-button" on:click=on_edit>
                            <i class="fas fa-pen-to-square"></i>
                            "modifier"
                        </button>
                    </Show>
                </header>
                <Show when=move || experience().shows_filter_bar()>
                    <FilterBar gallery=gallery/>
                </Show>
                <Show when=move || gallery.with(|g| g.loading)>
                    <p class="gallery-status">"Chargement..."</p>
                </Show>
                <GalleryGrid gallery=gallery/>
            </section>
        </main>
        <Show when=move || modal.with(EditModalState::is_open)>
            <EditModal modal=modal gallery=gallery/>
        </Show>
    }
}
