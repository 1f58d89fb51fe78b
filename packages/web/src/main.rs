use dioxus::prelude::*;

use views::{Dashboard, Login};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/dashboard")]
    Dashboard {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(ui::make_credentials);
    use_context_provider(|| api::ProfileClient::new(api::ApiConfig::from_env()));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::TAILWIND_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Redirect `/` to `/dashboard`; the dashboard sends signed-out visitors on to
/// the login page.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Dashboard {});
    rsx! {}
}
