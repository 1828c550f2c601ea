//! Admin edit modal: work list with delete controls, and the add-work form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted by the gallery page only while [`EditModalState`] is open. Every
//! listener lives on nodes owned by this view, so closing the modal unmounts
//! them together; the next open starts with a fresh set.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::net::api::HttpApi;
use crate::net::types::ImageBlob;
#[cfg(feature = "csr")]
use crate::state::add_work::ImageSelection;
use crate::state::add_work::category_options;
use crate::state::edit_modal::{EditModalState, ModalPane};
use crate::state::gallery::GalleryState;
use crate::state::notice::{NoticeKind, NoticeState};
use crate::state::session::SessionState;
use crate::util::image_preview;
#[cfg(feature = "csr")]
use crate::util::gallery_actions;

#[component]
pub fn EditModal(modal: RwSignal<EditModalState>, gallery: RwSignal<GalleryState>) -> impl IntoView {
    let section_ref = NodeRef::<leptos::html::Section>::new();
    // Escape is handled on the section, so it takes focus once mounted.
    #[cfg(feature = "csr")]
    Effect::new(move |_| {
        if let Some(section) = section_ref.get() {
            let _ = section.focus();
        }
    });
    let on_close = move |_| modal.update(EditModalState::close);
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            modal.update(EditModalState::close);
        }
    };
    let on_back = move |_| modal.update(EditModalState::back_to_list);
    let heading = move || {
        if modal.with(|m| m.pane == ModalPane::AddForm) { "Ajout photo" } else { "Galerie photos" }
    };

    view! {
        <div class="modal" on:click=on_close>
            <section
                class="modal-section"
                node_ref=section_ref
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <header class="modal-header">
                    <Show when=move || modal.with(|m| m.pane == ModalPane::AddForm)>
                        <button class="modal-back" on:click=on_back title="Retour">
                            <i class="fa-solid fa-arrow-left"></i>
                        </button>
                    </Show>
                    <h2>{heading}</h2>
                    <button class="close" on:click=on_close title="Fermer">"×"</button>
                </header>
                <Show
                    when=move || modal.with(|m| m.pane == ModalPane::AddForm)
                    fallback=move || view! { <WorkListPane modal=modal gallery=gallery/> }
                >
                    <AddWorkPane modal=modal gallery=gallery/>
                </Show>
            </section>
        </div>
    }
}

/// First pane: the modal's own copy of the works, each with a trash control.
#[component]
fn WorkListPane(modal: RwSignal<EditModalState>, gallery: RwSignal<GalleryState>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notice = expect_context::<RwSignal<NoticeState>>();

    let on_delete = move |id: i64| {
        let Some(token) = session.with_untracked(|s| s.token().map(str::to_owned)) else {
            leptos::logging::warn!("delete requested without a session token");
            return;
        };
        if !modal.try_update(|m| m.begin_delete(id)).unwrap_or(false) {
            return;
        }

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let outcome = gallery_actions::delete_work(&HttpApi, &token, id).await;
            let (Some(mut m), Some(mut g), Some(mut n)) =
                (modal.try_get_untracked(), gallery.try_get_untracked(), notice.try_get_untracked())
            else {
                return;
            };
            gallery_actions::apply_delete(&mut m, &mut g, &mut n, id, outcome);
            modal.set(m);
            gallery.set(g);
            notice.set(n);
        });

        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, gallery, notice);
        }
    };

    view! {
        <Show when=move || modal.with(|m| m.loading)>
            <p class="modal-status">"Chargement..."</p>
        </Show>
        <Show when=move || modal.with(|m| m.list_error.is_some())>
            <p class="modal-status modal-status--error">
                {move || modal.with(|m| m.list_error.clone().unwrap_or_default())}
            </p>
        </Show>
        <ul class="modal-body">
            <For
                each=move || modal.with(|m| m.works.clone())
                key=|work| work.id
                children=move |work| {
                    let id = work.id;
                    let label = format!("Supprimer {}", work.title);
                    view! {
                        <figure data-category=work.category_id.to_string()>
                            <img src=work.image_url alt=work.title.clone()/>
                            <figcaption>
                                <button
                                    class="modal-delete"
                                    disabled=move || modal.with(|m| m.is_deleting(id))
                                    on:click=move |ev: leptos::ev::MouseEvent| {
                                        ev.prevent_default();
                                        ev.stop_propagation();
                                        on_delete(id);
                                    }
                                    title="Supprimer"
                                    aria-label=label
                                >
                                    <i class="fa-solid fa-trash-can"></i>
                                </button>
                            </figcaption>
                        </figure>
                    }
                }
            />
        </ul>
        <button class="modal-btn" on:click=move |_| modal.update(EditModalState::show_add_form)>
            "Ajouter une photo"
        </button>
    }
}

/// Second pane: the add-work form. Unmounted on back/close, which drops the
/// picked file and revokes its preview URL.
#[component]
fn AddWorkPane(modal: RwSignal<EditModalState>, gallery: RwSignal<GalleryState>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notice = expect_context::<RwSignal<NoticeState>>();
    let image_blob = StoredValue::new_local(None::<ImageBlob>);
    let preview_url = RwSignal::new(None::<String>);

    on_cleanup(move || {
        if let Some(url) = preview_url.try_get_untracked().flatten() {
            image_preview::revoke(&url);
        }
    });

    let on_image_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            let file = input.files().and_then(|list| list.get(0));
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let selection = file
                .as_ref()
                .map(|f| ImageSelection { name: f.name(), size: f.size() as u64 });
            let accepted = modal
                .try_update(|m| m.form.select_image(selection).is_ok())
                .unwrap_or(false);
            if let Some(old) = preview_url.get_untracked() {
                image_preview::revoke(&old);
            }
            let file = file.filter(|_| accepted);
            if !accepted {
                input.set_value("");
            }
            preview_url.set(file.as_ref().and_then(image_preview::create));
            image_blob.set_value(file);
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(token) = session.with_untracked(|s| s.token().map(str::to_owned)) else {
            leptos::logging::warn!("submit requested without a session token");
            return;
        };
        let Some(image) = image_blob.get_value() else {
            notice.update(|n| {
                n.push(NoticeKind::Error, crate::error::INCOMPLETE_FORM_MESSAGE);
            });
            return;
        };
        let new_work = match modal.try_update(EditModalState::begin_submit) {
            Some(Ok(Some(work))) => work,
            Some(Ok(None)) | None => return,
            Some(Err(e)) => {
                leptos::logging::warn!("add-work form rejected: {e}");
                notice.update(|n| {
                    n.push(NoticeKind::Error, crate::error::INCOMPLETE_FORM_MESSAGE);
                });
                return;
            }
        };

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let outcome = gallery_actions::submit_work(&HttpApi, &token, &new_work, &image).await;
            let (Some(mut m), Some(mut g), Some(mut n)) =
                (modal.try_get_untracked(), gallery.try_get_untracked(), notice.try_get_untracked())
            else {
                return;
            };
            gallery_actions::apply_submit(&mut m, &mut g, &mut n, outcome);
            modal.set(m);
            gallery.set(g);
            notice.set(n);
        });

        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, image, new_work, gallery);
        }
    };

    let options = move || gallery.with(|g| category_options(&g.categories));
    let image_error = move || modal.with(|m| m.form.image_error.map(|e| e.to_string()));

    view! {
        <form class="modal-form" on:submit=on_submit>
            <div class="add-works">
                <Show
                    when=move || preview_url.with(Option::is_some)
                    fallback=|| {
                        view! {
                            <i class="fa-regular fa-image"></i>
                            <label for="image">"+ Ajouter photo"</label>
                            <p>"jpg, png : 4mo max"</p>
                        }
                    }
                >
                    <figure>
                        <img src=move || preview_url.get().unwrap_or_default() alt="Aperçu"/>
                    </figure>
                </Show>
                <input
                    type="file"
                    id="image"
                    accept=crate::config::IMAGE_ACCEPT_ATTR
                    on:change=on_image_change
                />
            </div>
            {move || image_error().map(|msg| view! { <p class="form-error">{msg}</p> })}
            <label for="title-input">"Titre"</label>
            <input
                type="text"
                id="title-input"
                prop:value=move || modal.with(|m| m.form.title.clone())
                on:input=move |ev| modal.update(|m| m.form.set_title(event_target_value(&ev)))
            />
            <label for="category-input">"Catégorie"</label>
            <select
                id="category-input"
                name="category"
                on:change=move |ev| modal.update(|m| m.form.set_category(&event_target_value(&ev)))
            >
                <option value="" disabled hidden selected></option>
                {move || {
                    options()
                        .into_iter()
                        .map(|(value, label)| view! { <option value=value>{label}</option> })
                        .collect_view()
                }}
            </select>
            <hr/>
            <input
                type="submit"
                class="form-btn"
                value="Valider"
                disabled=move || !modal.with(|m| m.form.can_submit())
            />
        </form>
    }
}
