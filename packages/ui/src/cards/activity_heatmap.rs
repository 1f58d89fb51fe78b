use api::Activity;
use dioxus::prelude::*;

use super::CARD_CLASS;

/// Colour bucket 0–4 for a day's activity count.
pub fn intensity(count: u32) -> u8 {
    match count {
        0 => 0,
        1..=2 => 1,
        3..=5 => 2,
        6..=9 => 3,
        _ => 4,
    }
}

fn cell_class(level: u8) -> &'static str {
    match level {
        0 => "w-3 h-3 rounded-sm bg-gray-200",
        1 => "w-3 h-3 rounded-sm bg-green-200",
        2 => "w-3 h-3 rounded-sm bg-green-400",
        3 => "w-3 h-3 rounded-sm bg-green-600",
        _ => "w-3 h-3 rounded-sm bg-green-800",
    }
}

/// One cell per day, shaded by activity count.
#[component]
pub fn ActivityHeatmap(activity_data: Vec<Activity>) -> Element {
    rsx! {
        div {
            class: CARD_CLASS,
            h3 { class: "m-0 mb-2 font-semibold", "Activity" }
            if activity_data.is_empty() {
                p { class: "m-0 text-sm text-gray-500", "No activity yet" }
            }
            div {
                class: "flex flex-wrap gap-1",
                for (index, day) in activity_data.iter().enumerate() {
                    div {
                        key: "{index}",
                        class: cell_class(intensity(day.count)),
                        title: "{day.date}: {day.count}",
                    }
                }
            }
        }
    }
}
