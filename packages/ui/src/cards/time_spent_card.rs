use dioxus::prelude::*;

use super::CARD_CLASS;
use crate::icons::FaClock;
use crate::Icon;

#[component]
pub fn TimeSpentCard(time: String) -> Element {
    rsx! {
        div {
            class: CARD_CLASS,
            h3 { class: "m-0 mb-2 font-semibold", "Time spent" }
            div {
                class: "flex items-center gap-2",
                Icon { icon: FaClock, width: 16, height: 16 }
                span { class: "text-xl", "{time}" }
            }
        }
    }
}
