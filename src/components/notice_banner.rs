//! Non-blocking notice banner fed by the shared [`NoticeState`] context.

use leptos::prelude::*;

use crate::state::notice::{NoticeKind, NoticeState};

/// Shows the current notice and dismisses it after a fixed delay.
#[component]
pub fn NoticeBanner() -> impl IntoView {
    let notice = expect_context::<RwSignal<NoticeState>>();

    #[cfg(feature = "csr")]
    Effect::new(move || {
        if let Some(id) = notice.with(|n| n.current.as_ref().map(|c| c.id)) {
            gloo_timers::callback::Timeout::new(crate::config::NOTICE_TIMEOUT_MS, move || {
                notice.update(|n| n.dismiss(id));
            })
            .forget();
        }
    });

    view! {
        {move || {
            notice
                .with(|n| n.current.clone())
                .map(|current| {
                    let id = current.id;
                    view! {
                        <div
                            class="notice"
                            class:notice--error={current.kind == NoticeKind::Error}
                            role="status"
                        >
                            <span class="notice__text">{current.text}</span>
                            <button
                                class="notice__close"
                                on:click=move |_| notice.update(|n| n.dismiss(id))
                                title="Fermer"
                            >
                                "×"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
