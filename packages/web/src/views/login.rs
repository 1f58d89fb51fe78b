//! Login page: trades email and password for a session token.

use api::LOGIN_FALLBACK_MESSAGE;
use dioxus::prelude::*;
use store::CredentialStore;
use ui::dashboard::session_token;
use ui::{use_credentials, use_profile_client};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let credentials = use_credentials();
    let client = use_profile_client();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    // Already signed in
    if session_token(&credentials).is_some() {
        nav.replace(Route::Dashboard {});
    }

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let credentials = credentials.clone();
        async move {
            submitting.set(true);
            error.set(None);
            match client.login(email().trim(), &password()).await {
                Ok(token) => {
                    credentials.set_token(&token);
                    tracing::info!("Signed in");
                    nav.replace(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::warn!("Login failed: {}", e);
                    error.set(Some(e.message_or(LOGIN_FALLBACK_MESSAGE)));
                    submitting.set(false);
                }
            }
        }
    };

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8",

            h1 { class: "mb-2 text-2xl font-bold", "devboard" }
            p { class: "mb-8 text-gray-600", "Sign in to see your dashboard." }

            form {
                class: "flex flex-col gap-3 w-full max-w-xs",
                onsubmit: onsubmit,

                input {
                    class: "border rounded px-3 py-2",
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                }
                input {
                    class: "border rounded px-3 py-2",
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }

                if let Some(message) = error() {
                    p { class: "m-0 text-sm text-red-500", "{message}" }
                }

                button {
                    class: "px-4 py-2 rounded bg-blue-600 text-white disabled:opacity-50",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Signing in..." } else { "Sign in" }
                }
            }
        }
    }
}
