//! Data models for the application.

mod auth;
mod lenient;
mod profile;

pub use auth::{AuthToken, LoginRequest};
pub use profile::{Activity, Goal, Note, Profile, SafeProfile, SocialLink, DEFAULT_TIME_SPENT};
