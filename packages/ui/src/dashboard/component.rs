use api::{Goal, Note};
use dioxus::prelude::*;
use futures::future::AbortHandle;

use super::state::{load_until_aborted, DashboardState, LoadOutcome, ReadyState};
use super::view::DashboardView;
use crate::context::{use_credentials, use_profile_client};

/// The dashboard's state signal and the edits its cards report.
#[derive(Clone, Copy, PartialEq)]
pub struct DashboardHandle {
    state: Signal<DashboardState>,
}

impl DashboardHandle {
    /// Current state, subscribing the calling component to changes.
    pub fn state(&self) -> DashboardState {
        (self.state)()
    }

    pub fn set_goals(mut self, goals: Vec<Goal>) {
        self.edit(|ready| ready.set_goals(goals));
    }

    pub fn set_notes(mut self, notes: Vec<Note>) {
        self.edit(|ready| ready.set_notes(notes));
    }

    // Edits only apply once the profile is loaded
    fn edit(&mut self, apply: impl FnOnce(&mut ReadyState)) {
        if let DashboardState::Ready(ready) = &mut *self.state.write() {
            apply(ready);
        }
    }
}

/// Starts the one-shot profile load for this component and aborts it on drop.
pub fn use_dashboard(on_login_required: EventHandler<()>) -> DashboardHandle {
    let credentials = use_credentials();
    let client = use_profile_client();
    let mut state = use_signal(|| DashboardState::Loading);

    let abort = use_hook(move || {
        let (handle, registration) = AbortHandle::new_pair();
        spawn(async move {
            let Some(outcome) = load_until_aborted(&credentials, &client, registration).await else {
                return;
            };
            if matches!(outcome, LoadOutcome::Unauthenticated) {
                on_login_required.call(());
            }
            state.set(DashboardState::from_outcome(outcome));
        });
        handle
    });

    // Late results must not reach a disposed view
    use_drop(move || abort.abort());

    DashboardHandle { state }
}

/// The dashboard page.
///
/// On mount it checks for a stored token and, if there is one, loads the
/// profile once. `on_login_required` fires when there is no token; the caller
/// decides where that navigates. The token is only ever read here.
#[component]
pub fn Dashboard(on_login_required: EventHandler<()>, on_sign_out: EventHandler<()>) -> Element {
    let dashboard = use_dashboard(on_login_required);

    rsx! {
        DashboardView {
            state: dashboard.state(),
            on_goals_change: move |goals| dashboard.set_goals(goals),
            on_notes_change: move |notes| dashboard.set_notes(notes),
            on_sign_out: on_sign_out,
        }
    }
}
