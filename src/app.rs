//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::notice_banner::NoticeBanner;
use crate::pages::{gallery::GalleryPage, login::LoginPage};
use crate::state::notice::NoticeState;
use crate::state::session::SessionState;

/// Root application component.
///
/// Reads the session once per load and provides it, together with the
/// notice banner state, to every route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::load());
    let notice = RwSignal::new(NoticeState::default());

    provide_context(session);
    provide_context(notice);

    view! {
        <Stylesheet id="folio" href="/assets/style.css"/>
        <Title text="Portfolio"/>

        <Router>
            <NoticeBanner/>
            <Routes fallback=|| "Page introuvable.".into_view()>
                <Route path=StaticSegment("") view=GalleryPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
            </Routes>
        </Router>
    }
}
