use api::Note;
use dioxus::prelude::*;

use super::CARD_CLASS;
use crate::icons::{FaNoteSticky, FaTrash};
use crate::Icon;

/// Notes list with add and remove.
#[component]
pub fn NotesCard(notes: Vec<Note>, on_notes_change: EventHandler<Vec<Note>>) -> Element {
    let mut draft = use_signal(String::new);

    let add_note = {
        let notes = notes.clone();
        move |_| {
            let text = draft().trim().to_string();
            if text.is_empty() {
                return;
            }
            let mut next = notes.clone();
            next.push(Note::new(text));
            on_notes_change.call(next);
            draft.set(String::new());
        }
    };

    rsx! {
        div {
            id: "notes",
            class: CARD_CLASS,
            div {
                class: "flex items-center gap-2 mb-2",
                Icon { icon: FaNoteSticky, width: 16, height: 16 }
                h3 { class: "m-0 font-semibold", "Notes" }
            }
            ul {
                class: "m-0 p-0 list-none flex flex-col gap-1",
                for (index, note) in notes.iter().enumerate() {
                    li {
                        key: "{index}",
                        class: "flex items-start gap-2",
                        p { class: "m-0 flex-1 whitespace-pre-wrap", "{note.text}" }
                        button {
                            class: "text-gray-400 hover:text-red-500",
                            title: "Remove note",
                            onclick: {
                                let notes = notes.clone();
                                move |_| {
                                    let mut next = notes.clone();
                                    next.remove(index);
                                    on_notes_change.call(next);
                                }
                            },
                            Icon { icon: FaTrash, width: 12, height: 12 }
                        }
                    }
                }
            }
            div {
                class: "flex flex-col gap-2 mt-2",
                textarea {
                    class: "border rounded px-2 py-1",
                    rows: "2",
                    placeholder: "Write a note",
                    value: draft(),
                    oninput: move |evt| draft.set(evt.value()),
                }
                button {
                    class: "self-end px-3 py-1 rounded bg-blue-600 text-white",
                    onclick: add_note,
                    "Add note"
                }
            }
        }
    }
}
