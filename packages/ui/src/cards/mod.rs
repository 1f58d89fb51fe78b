//! Dashboard widgets. Each card renders from plain props; the two editable
//! cards report the whole new list through their callback.

mod activity_heatmap;
pub use activity_heatmap::{intensity, ActivityHeatmap};

mod github_card;
pub use github_card::GitHubCard;

mod goals_card;
pub use goals_card::GoalsCard;

mod notes_card;
pub use notes_card::NotesCard;

mod platform_links;
pub use platform_links::PlatformLinks;

mod profile_card;
pub use profile_card::ProfileCard;

mod streak_card;
pub use streak_card::StreakCard;

mod time_spent_card;
pub use time_spent_card::TimeSpentCard;

const CARD_CLASS: &str = "col-span-1 p-4 border rounded-lg shadow-sm bg-white";
