use dioxus::prelude::*;

use crate::icons::FaRightFromBracket;
use crate::Icon;

#[component]
pub fn Topbar(on_sign_out: EventHandler<()>) -> Element {
    rsx! {
        header {
            class: "flex items-center justify-between px-6 py-3 bg-white border-b",
            h1 { class: "m-0 text-xl font-bold", "Dashboard" }
            button {
                class: "flex items-center gap-2 text-sm text-gray-600 hover:text-gray-900",
                onclick: move |_| on_sign_out.call(()),
                Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                "Sign out"
            }
        }
    }
}
