use api::{Goal, Note};
use dioxus::prelude::*;

use super::state::DashboardState;
use crate::cards::{
    ActivityHeatmap, GitHubCard, GoalsCard, NotesCard, PlatformLinks, ProfileCard, StreakCard,
    TimeSpentCard,
};
use crate::{Sidebar, Topbar};

/// Text shown in the GitHub slot when no username is linked.
pub const GITHUB_NOT_LINKED: &str = "GitHub profile not linked";

/// Renders a [`DashboardState`]. Holds no state of its own; edits are
/// reported through the callbacks.
#[component]
pub fn DashboardView(
    state: DashboardState,
    on_goals_change: EventHandler<Vec<Goal>>,
    on_notes_change: EventHandler<Vec<Note>>,
    on_sign_out: EventHandler<()>,
) -> Element {
    let ready = match state {
        DashboardState::Loading => return rsx! { p { class: "p-6", "Loading..." } },
        DashboardState::SignedOut => return rsx! {},
        DashboardState::Failed(message) => {
            return rsx! { p { class: "p-6 text-red-500", "{message}" } };
        }
        DashboardState::Ready(ready) => ready,
    };

    let profile = ready.safe_profile();
    let goals = ready.goals().to_vec();

    rsx! {
        div {
            class: "flex flex-col h-screen",
            Topbar { on_sign_out: on_sign_out }
            div {
                class: "flex flex-1",
                Sidebar {}
                main {
                    class: "flex-1 p-6 bg-[#d1e4f3]",
                    div {
                        class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4 p-4",

                        ProfileCard { user: profile.clone() }
                        PlatformLinks { platforms: profile.social_links.clone() }
                        StreakCard { streak: profile.streak }

                        if profile.has_github() {
                            GitHubCard { github_username: profile.github_username.clone() }
                        } else {
                            div {
                                class: "col-span-1 p-4 border rounded-lg shadow-sm bg-gray-100 text-gray-500 flex items-center justify-center",
                                "{GITHUB_NOT_LINKED}"
                            }
                        }

                        GoalsCard { goals: goals, on_goals_change: on_goals_change }
                        TimeSpentCard { time: profile.time_spent.clone() }
                        NotesCard { notes: profile.notes.clone(), on_notes_change: on_notes_change }

                        div {
                            class: "col-span-1 sm:col-span-2 lg:col-span-3",
                            ActivityHeatmap { activity_data: profile.activity.clone() }
                        }
                    }
                }
            }
        }
    }
}
