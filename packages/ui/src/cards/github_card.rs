use dioxus::prelude::*;

use super::CARD_CLASS;
use crate::icons::brands::FaGithub;
use crate::Icon;

/// Linked GitHub account. Only rendered when a username is set.
#[component]
pub fn GitHubCard(github_username: String) -> Element {
    let profile_url = format!("https://github.com/{github_username}");

    rsx! {
        div {
            class: CARD_CLASS,
            div {
                class: "flex items-center gap-3",
                img {
                    class: "w-12 h-12 rounded-full",
                    src: "{profile_url}.png?size=96",
                    alt: "{github_username}",
                }
                div {
                    h3 { class: "m-0 font-semibold", "{github_username}" }
                    a {
                        class: "flex items-center gap-1 text-sm text-blue-700",
                        href: "{profile_url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        Icon { icon: FaGithub, width: 14, height: 14 }
                        "View on GitHub"
                    }
                }
            }
        }
    }
}
