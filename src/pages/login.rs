//! Admin login page: posts credentials and stores the returned token.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::site_header::SiteHeader;
use crate::error::ValidationError;
use crate::net::types::Credentials;

#[cfg_attr(not(feature = "csr"), allow(dead_code))]
pub(crate) const LOGIN_FAILED_MESSAGE: &str = "Erreur dans l’identifiant ou le mot de passe";
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
pub(crate) const SESSION_NOT_STORED_MESSAGE: &str = "Impossible d'enregistrer la session dans ce navigateur";

/// Trim the email and require both fields.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<Credentials, ValidationError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login_input(&email.get(), &password.get()) {
            Ok(c) => c,
            Err(e) => {
                error.set(e.to_string());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::util::gallery_actions::login(&crate::net::api::HttpApi, &credentials).await {
                Ok(resp) if crate::util::storage::store_session(&resp) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/");
                    }
                }
                Ok(_) => {
                    error.set(SESSION_NOT_STORED_MESSAGE.to_owned());
                    busy.set(false);
                }
                Err(_) => {
                    error.set(LOGIN_FAILED_MESSAGE.to_owned());
                    busy.set(false);
                }
            }
        });

        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
        }
    };

    view! {
        <SiteHeader/>
        <main>
            <section id="login">
                <h2>"Log In"</h2>
                <form class="login-form" on:submit=on_submit>
                    <label for="email">"E-mail"</label>
                    <input
                        type="email"
                        id="email"
                        name="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label for="password">"Mot de passe"</label>
                    <input
                        type="password"
                        id="password"
                        name="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input type="submit" id="submit" value="Se connecter" disabled=move || busy.get()/>
                </form>
                <p id="error-message" class="login-error">{move || error.get()}</p>
                <a href="#" class="login-forgot">"Mot de passe oublié"</a>
            </section>
        </main>
    }
}
