use dioxus::prelude::*;

use super::CARD_CLASS;
use crate::icons::FaFire;
use crate::Icon;

#[component]
pub fn StreakCard(streak: i64) -> Element {
    rsx! {
        div {
            class: CARD_CLASS,
            div {
                class: "flex items-center gap-2 text-orange-500",
                Icon { icon: FaFire, width: 20, height: 20 }
                span { class: "text-2xl font-bold", "{streak} day streak" }
            }
        }
    }
}
