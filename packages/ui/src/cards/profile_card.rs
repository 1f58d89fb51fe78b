use api::SafeProfile;
use dioxus::prelude::*;

use super::CARD_CLASS;
use crate::icons::FaUser;
use crate::Icon;

/// Who is signed in.
#[component]
pub fn ProfileCard(user: SafeProfile) -> Element {
    let handle = if user.has_github() {
        Some(format!("@{}", user.github_username))
    } else {
        None
    };
    let name = user
        .display_name()
        .map(str::to_string)
        .or_else(|| handle.clone())
        .unwrap_or_else(|| "Anonymous".to_string());

    rsx! {
        div {
            class: CARD_CLASS,
            div {
                class: "flex items-center gap-3",
                Icon { icon: FaUser, width: 32, height: 32 }
                div {
                    h2 { class: "m-0 text-lg font-semibold", "{name}" }
                    if let Some(handle) = handle {
                        p { class: "m-0 text-sm text-gray-500", "{handle}" }
                    }
                }
            }
            if let Some(bio) = user.bio() {
                p { class: "mt-3 text-sm text-gray-700", "{bio}" }
            }
        }
    }
}
