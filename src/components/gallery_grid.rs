//! Gallery tiles projected from [`GalleryState`].
//!
//! DESIGN
//! ======
//! Every tile stays mounted; the filter selection only toggles `display`, so
//! switching filters never rebuilds image nodes.

use leptos::prelude::*;

use crate::state::gallery::GalleryState;

#[component]
pub fn GalleryGrid(gallery: RwSignal<GalleryState>) -> impl IntoView {
    view! {
        <div class="gallery">
            <For
                each=move || gallery.with(GalleryState::tiles)
                key=|tile| tile.work_id
                children=move |tile| {
                    let tag = tile.tag;
                    let display = move || {
                        if gallery.with(|g| g.selected.matches(tag)) { "block" } else { "none" }
                    };
                    view! {
                        <figure class="works" data-category=tag.to_string() style:display=display>
                            <img src=tile.image_url alt=tile.title.clone()/>
                            <figcaption>{tile.title}</figcaption>
                        </figure>
                    }
                }
            />
        </div>
    }
}
