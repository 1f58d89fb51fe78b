use api::SocialLink;
use dioxus::prelude::*;

use super::CARD_CLASS;
use crate::icons::brands::{FaGithub, FaLinkedin, FaStackOverflow, FaTwitter};
use crate::icons::FaLink;
use crate::Icon;

#[component]
pub fn PlatformLinks(platforms: Vec<SocialLink>) -> Element {
    rsx! {
        div {
            class: CARD_CLASS,
            h3 { class: "m-0 mb-2 font-semibold", "Platforms" }
            if platforms.is_empty() {
                p { class: "m-0 text-sm text-gray-500", "No linked platforms" }
            }
            ul {
                class: "m-0 p-0 list-none flex flex-col gap-2",
                for (index, link) in platforms.iter().enumerate() {
                    li {
                        key: "{index}",
                        a {
                            class: "flex items-center gap-2 text-blue-700",
                            href: "{link.url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            PlatformIcon { platform: link.platform.clone() }
                            span { "{link.platform}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PlatformIcon(platform: String) -> Element {
    match platform.to_lowercase().as_str() {
        "github" => rsx! { Icon { icon: FaGithub, width: 16, height: 16 } },
        "linkedin" => rsx! { Icon { icon: FaLinkedin, width: 16, height: 16 } },
        "twitter" | "x" => rsx! { Icon { icon: FaTwitter, width: 16, height: 16 } },
        "stackoverflow" | "stack overflow" => {
            rsx! { Icon { icon: FaStackOverflow, width: 16, height: 16 } }
        }
        _ => rsx! { Icon { icon: FaLink, width: 16, height: 16 } },
    }
}
