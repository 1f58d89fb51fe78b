//! # Profile models
//!
//! Two representations of the signed-in user's dashboard profile:
//!
//! ## [`Profile`]
//!
//! The body of `GET /api/profile` exactly as the server sent it. Every field is
//! optional because the server omits whatever the user has not filled in yet.
//! Fields this crate does not know about are kept in [`Profile::extra`] so
//! they survive a round trip through the view.
//!
//! ## [`SafeProfile`]
//!
//! The fully-defaulted projection the UI renders from. It is produced by
//! [`SafeProfile::from_profile`], which overlays the fields present in a
//! [`Profile`] onto [`SafeProfile::default`]. A JSON `null` counts as absent,
//! at the top level and inside nested records alike. Mistyped values are
//! coerced or dropped while decoding (see `lenient`), never rejected.
//!
//! | Field | Default |
//! |-------|---------|
//! | `github_username` | `""` |
//! | `streak` | `0` |
//! | `notes` | `[]` |
//! | `time_spent` | [`DEFAULT_TIME_SPENT`] |
//! | `activity` | `[]` |
//! | `social_links` | `[]` |

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::lenient;

/// Time-spent label shown before the server reports any.
pub const DEFAULT_TIME_SPENT: &str = "0 minutes";

/// A free-form note pinned to the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(
        rename = "_id",
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub text: String,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
}

impl Note {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

/// A goal the user is tracking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    #[serde(
        rename = "_id",
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub text: String,
    #[serde(default, deserialize_with = "lenient::boolean")]
    pub completed: bool,
}

impl Goal {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

/// Activity count for one day: `date` is `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default, deserialize_with = "lenient::string")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient::count")]
    pub count: u32,
}

/// A link to one of the user's profiles on another platform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    #[serde(default, deserialize_with = "lenient::string")]
    pub platform: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub url: String,
}

/// Profile as returned by the server, any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub github_username: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_integer",
        skip_serializing_if = "Option::is_none"
    )]
    pub streak: Option<i64>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<Vec<Note>>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub time_spent: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub activity: Option<Vec<Activity>>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub social_links: Option<Vec<SocialLink>>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub goals: Option<Vec<Goal>>,
    /// Fields not modelled above, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Profile with every rendered field guaranteed present.
#[derive(Debug, Clone, PartialEq)]
pub struct SafeProfile {
    pub github_username: String,
    pub streak: i64,
    pub notes: Vec<Note>,
    pub time_spent: String,
    pub activity: Vec<Activity>,
    pub social_links: Vec<SocialLink>,
    pub goals: Option<Vec<Goal>>,
    pub extra: Map<String, Value>,
}

impl Default for SafeProfile {
    fn default() -> Self {
        Self {
            github_username: String::new(),
            streak: 0,
            notes: Vec::new(),
            time_spent: DEFAULT_TIME_SPENT.to_string(),
            activity: Vec::new(),
            social_links: Vec::new(),
            goals: None,
            extra: Map::new(),
        }
    }
}

impl SafeProfile {
    /// Overlay `profile` onto the defaults. `None` yields the defaults.
    pub fn from_profile(profile: Option<&Profile>) -> Self {
        let defaults = Self::default();
        let Some(profile) = profile else {
            return defaults;
        };

        Self {
            github_username: profile
                .github_username
                .clone()
                .unwrap_or(defaults.github_username),
            streak: profile.streak.unwrap_or(defaults.streak),
            notes: profile.notes.clone().unwrap_or(defaults.notes),
            time_spent: profile.time_spent.clone().unwrap_or(defaults.time_spent),
            activity: profile.activity.clone().unwrap_or(defaults.activity),
            social_links: profile.social_links.clone().unwrap_or(defaults.social_links),
            goals: profile.goals.clone(),
            extra: profile.extra.clone(),
        }
    }

    /// Whether a GitHub account is linked.
    pub fn has_github(&self) -> bool {
        !self.github_username.is_empty()
    }

    /// Display name from the passthrough `name` field, if the server sent one.
    pub fn display_name(&self) -> Option<&str> {
        self.extra
            .get("name")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
    }

    pub fn bio(&self) -> Option<&str> {
        self.extra.get("bio").and_then(Value::as_str)
    }
}

impl From<&Profile> for SafeProfile {
    fn from(profile: &Profile) -> Self {
        Self::from_profile(Some(profile))
    }
}

impl From<SafeProfile> for Profile {
    fn from(safe: SafeProfile) -> Self {
        Self {
            github_username: Some(safe.github_username),
            streak: Some(safe.streak),
            notes: Some(safe.notes),
            time_spent: Some(safe.time_spent),
            activity: Some(safe.activity),
            social_links: Some(safe.social_links),
            goals: safe.goals,
            extra: safe.extra,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(body: Value) -> Profile {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_missing_profile_is_all_defaults() {
        let safe = SafeProfile::from_profile(None);
        assert_eq!(safe, SafeProfile::default());
        assert_eq!(safe.github_username, "");
        assert_eq!(safe.streak, 0);
        assert!(safe.notes.is_empty());
        assert_eq!(safe.time_spent, "0 minutes");
        assert!(safe.activity.is_empty());
        assert!(safe.social_links.is_empty());
    }

    #[test]
    fn test_partial_profile_fills_only_missing_fields() {
        let profile = parse(json!({ "githubUsername": "alice", "streak": 5 }));
        let safe = SafeProfile::from(&profile);

        assert_eq!(
            safe,
            SafeProfile {
                github_username: "alice".to_string(),
                streak: 5,
                ..SafeProfile::default()
            }
        );
        assert!(safe.has_github());
    }

    #[test]
    fn test_present_fields_pass_through() {
        let profile = parse(json!({
            "githubUsername": "bob",
            "streak": 12,
            "notes": [{ "_id": "n1", "text": "ship it" }],
            "timeSpent": "3 hours",
            "activity": [{ "date": "2024-05-01", "count": 4 }],
            "socialLinks": [{ "platform": "github", "url": "https://github.com/bob" }],
        }));
        let safe = SafeProfile::from(&profile);

        assert_eq!(safe.github_username, "bob");
        assert_eq!(safe.streak, 12);
        assert_eq!(safe.notes.len(), 1);
        assert_eq!(safe.notes[0].id.as_deref(), Some("n1"));
        assert_eq!(safe.notes[0].text, "ship it");
        assert_eq!(safe.time_spent, "3 hours");
        assert_eq!(safe.activity[0].count, 4);
        assert_eq!(safe.social_links[0].platform, "github");
    }

    #[test]
    fn test_each_missing_field_gets_its_default() {
        let full = json!({
            "githubUsername": "carol",
            "streak": 3,
            "notes": [{ "text": "a" }],
            "timeSpent": "1 hour",
            "activity": [{ "date": "2024-01-01", "count": 1 }],
            "socialLinks": [{ "platform": "x", "url": "https://x.com/carol" }],
        });
        let complete = SafeProfile::from(&parse(full.clone()));
        let defaults = SafeProfile::default();

        for key in ["githubUsername", "streak", "notes", "timeSpent", "activity", "socialLinks"] {
            let mut body = full.clone();
            body.as_object_mut().unwrap().remove(key);
            let safe = SafeProfile::from(&parse(body));

            let mut expected = complete.clone();
            match key {
                "githubUsername" => expected.github_username = defaults.github_username.clone(),
                "streak" => expected.streak = defaults.streak,
                "notes" => expected.notes = defaults.notes.clone(),
                "timeSpent" => expected.time_spent = defaults.time_spent.clone(),
                "activity" => expected.activity = defaults.activity.clone(),
                "socialLinks" => expected.social_links = defaults.social_links.clone(),
                _ => unreachable!(),
            }
            assert_eq!(safe, expected, "removing {key}");
        }
    }

    #[test]
    fn test_null_fields_count_as_missing() {
        let profile = parse(json!({ "streak": null, "timeSpent": null }));
        let safe = SafeProfile::from(&profile);
        assert_eq!(safe.streak, 0);
        assert_eq!(safe.time_spent, DEFAULT_TIME_SPENT);
    }

    #[test]
    fn test_whole_float_streak_is_accepted() {
        let profile = parse(json!({ "githubUsername": "alice", "streak": 5.0 }));
        assert_eq!(SafeProfile::from(&profile).streak, 5);
    }

    #[test]
    fn test_nested_nulls_get_defaults() {
        let profile = parse(json!({
            "notes": [{ "_id": null, "text": null }],
            "goals": [{ "text": "x", "completed": null }],
            "activity": [{ "date": null, "count": null }],
            "socialLinks": [{ "platform": null, "url": null }],
        }));
        let safe = SafeProfile::from(&profile);

        assert_eq!(safe.notes, vec![Note::default()]);
        assert_eq!(safe.goals, Some(vec![Goal::new("x")]));
        assert_eq!(safe.activity, vec![Activity::default()]);
        assert_eq!(safe.social_links, vec![SocialLink::default()]);
    }

    #[test]
    fn test_negative_activity_count_is_clamped() {
        let profile = parse(json!({ "activity": [{ "date": "2024-01-01", "count": -1 }] }));
        assert_eq!(
            profile.activity,
            Some(vec![Activity { date: "2024-01-01".to_string(), count: 0 }])
        );
    }

    #[test]
    fn test_mistyped_fields_do_not_fail_the_profile() {
        let profile = parse(json!({
            "githubUsername": "erin",
            "streak": "soon",
            "timeSpent": 90,
            "notes": "not a list",
            "activity": [null, { "date": "2024-02-02", "count": 2.0 }],
        }));
        let safe = SafeProfile::from(&profile);

        assert_eq!(safe.github_username, "erin");
        assert_eq!(safe.streak, 0);
        assert_eq!(safe.time_spent, "90");
        assert!(safe.notes.is_empty());
        assert_eq!(safe.activity, vec![Activity { date: "2024-02-02".to_string(), count: 2 }]);
    }

    #[test]
    fn test_unknown_fields_survive() {
        let profile = parse(json!({ "name": "Dana", "bio": "hi", "githubUsername": "dana" }));
        let safe = SafeProfile::from(&profile);
        assert_eq!(safe.display_name(), Some("Dana"));
        assert_eq!(safe.bio(), Some("hi"));

        let back = Profile::from(safe);
        assert_eq!(back.extra.get("name"), Some(&json!("Dana")));
        assert_eq!(back.github_username.as_deref(), Some("dana"));
    }

    #[test]
    fn test_goals_are_optional() {
        let without = parse(json!({}));
        assert!(without.goals.is_none());

        let with = parse(json!({ "goals": [{ "text": "learn rust", "completed": true }] }));
        let goals = with.goals.unwrap();
        assert_eq!(goals, vec![Goal { id: None, text: "learn rust".to_string(), completed: true }]);
    }
}
