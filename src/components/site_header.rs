//! Site header with navigation and the login/logout link.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::util::storage;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let on_logout = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        storage::clear_session();
        session.set(SessionState::default());
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().reload();
            }
        }
    };

    view! {
        <header class="site-header">
            <h1>
                "Portfolio"
                <span>"Architecte d'intérieur"</span>
            </h1>
            <nav>
                <ul>
                    <li><a href="/#portfolio">"projets"</a></li>
                    <li><a href="/#contact">"contact"</a></li>
                    <li>
                        <Show
                            when=move || session.with(SessionState::is_admin)
                            fallback=|| view! { <a id="loginLink" href="/login">"login"</a> }
                        >
                            <a id="loginLink" href="#" on:click=on_logout>"logout"</a>
                        </Show>
                    </li>
                </ul>
            </nav>
        </header>
    }
}
