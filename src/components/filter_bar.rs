//! Category filter buttons for visitors.

use leptos::prelude::*;

use crate::state::gallery::GalleryState;

/// One button per category plus "all"; exactly the last clicked is selected.
#[component]
pub fn FilterBar(gallery: RwSignal<GalleryState>) -> impl IntoView {
    view! {
        <ul class="filters">
            <For
                each=move || gallery.with(GalleryState::filter_buttons)
                key=|button| button.key
                children=move |button| {
                    let key = button.key;
                    view! {
                        <li>
                            <button
                                id=key.dom_id()
                                class="filters"
                                class:selected=move || gallery.with(|g| g.is_selected(key))
                                on:click=move |_| gallery.update(|g| g.select(key))
                            >
                                {button.label}
                            </button>
                        </li>
                    }
                }
            />
        </ul>
    }
}
