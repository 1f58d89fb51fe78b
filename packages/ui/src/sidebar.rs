use dioxus::prelude::*;

use crate::icons::{FaBullseye, FaGauge, FaNoteSticky};
use crate::Icon;

#[component]
pub fn Sidebar() -> Element {
    rsx! {
        nav {
            class: "w-56 shrink-0 bg-[#0f2a44] text-white p-4 hidden sm:flex flex-col gap-1",
            span { class: "mb-4 text-lg font-bold", "devboard" }
            a {
                class: "flex items-center gap-2 px-2 py-1 rounded bg-white/10",
                href: "#",
                Icon { icon: FaGauge, width: 14, height: 14 }
                "Overview"
            }
            a {
                class: "flex items-center gap-2 px-2 py-1 rounded hover:bg-white/10",
                href: "#goals",
                Icon { icon: FaBullseye, width: 14, height: 14 }
                "Goals"
            }
            a {
                class: "flex items-center gap-2 px-2 py-1 rounded hover:bg-white/10",
                href: "#notes",
                Icon { icon: FaNoteSticky, width: 14, height: 14 }
                "Notes"
            }
        }
    }
}
