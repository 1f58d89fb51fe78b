use dioxus::prelude::*;
use store::CredentialStore;
use ui::use_credentials;

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let credentials = use_credentials();
    let nav = use_navigator();

    rsx! {
        ui::Dashboard {
            on_login_required: move |_| {
                nav.replace(Route::Login {});
            },
            on_sign_out: move |_| {
                credentials.clear_token();
                tracing::info!("Signed out");
                nav.replace(Route::Login {});
            },
        }
    }
}
