//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;

    pub mod brands {
        pub use dioxus_free_icons::icons::fa_brands_icons::*;
    }
}

pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

mod context;
pub use context::{make_credentials, use_credentials, use_profile_client, Credentials};

pub mod cards;

pub mod dashboard;
pub use dashboard::{Dashboard, DashboardState, DashboardView, ReadyState};

mod topbar;
pub use topbar::Topbar;

mod sidebar;
pub use sidebar::Sidebar;
