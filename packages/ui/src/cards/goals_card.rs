use api::Goal;
use dioxus::prelude::*;

use super::CARD_CLASS;
use crate::icons::{FaBullseye, FaTrash};
use crate::Icon;

/// Goal list with add, toggle and remove.
#[component]
pub fn GoalsCard(goals: Vec<Goal>, on_goals_change: EventHandler<Vec<Goal>>) -> Element {
    let mut draft = use_signal(String::new);

    let add_goal = {
        let goals = goals.clone();
        move |_| {
            let text = draft().trim().to_string();
            if text.is_empty() {
                return;
            }
            let mut next = goals.clone();
            next.push(Goal::new(text));
            on_goals_change.call(next);
            draft.set(String::new());
        }
    };

    rsx! {
        div {
            id: "goals",
            class: CARD_CLASS,
            div {
                class: "flex items-center gap-2 mb-2",
                Icon { icon: FaBullseye, width: 16, height: 16 }
                h3 { class: "m-0 font-semibold", "Goals" }
            }
            ul {
                class: "m-0 p-0 list-none flex flex-col gap-1",
                for (index, goal) in goals.iter().enumerate() {
                    li {
                        key: "{index}",
                        class: "flex items-center gap-2",
                        input {
                            r#type: "checkbox",
                            checked: goal.completed,
                            onchange: {
                                let goals = goals.clone();
                                move |_| {
                                    let mut next = goals.clone();
                                    next[index].completed = !next[index].completed;
                                    on_goals_change.call(next);
                                }
                            },
                        }
                        span {
                            class: if goal.completed { "flex-1 line-through text-gray-400" } else { "flex-1" },
                            "{goal.text}"
                        }
                        button {
                            class: "text-gray-400 hover:text-red-500",
                            title: "Remove goal",
                            onclick: {
                                let goals = goals.clone();
                                move |_| {
                                    let mut next = goals.clone();
                                    next.remove(index);
                                    on_goals_change.call(next);
                                }
                            },
                            Icon { icon: FaTrash, width: 12, height: 12 }
                        }
                    }
                }
            }
            div {
                class: "flex gap-2 mt-2",
                input {
                    class: "flex-1 border rounded px-2 py-1",
                    r#type: "text",
                    placeholder: "New goal",
                    value: draft(),
                    oninput: move |evt| draft.set(evt.value()),
                }
                button {
                    class: "px-3 py-1 rounded bg-blue-600 text-white",
                    onclick: add_goal,
                    "Add"
                }
            }
        }
    }
}
