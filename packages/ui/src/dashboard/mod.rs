mod component;
pub use component::{use_dashboard, Dashboard, DashboardHandle};

mod state;
pub use state::{
    load_dashboard, load_until_aborted, session_token, DashboardState, LoadOutcome, ReadyState,
};

mod view;
pub use view::{DashboardView, GITHUB_NOT_LINKED};
