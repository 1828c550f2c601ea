//! Top-of-page banner shown while an admin token is stored.

use leptos::prelude::*;

#[component]
pub fn EditBanner() -> impl IntoView {
    view! {
        <div class="banner">
            <span>
                <i class="fas fa-pen-to-square"></i>
                "Mode édition"
            </span>
        </div>
    }
}
