//! # API crate: client side of the dashboard backend
//!
//! Everything the views need to talk to the backend: the wire models, the
//! defaulting that turns a partial profile into something safe to render,
//! the error envelope convention, and the HTTP client itself.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ProfileClient`] (reqwest) and the [`ProfileSource`] seam |
//! | [`config`] | [`ApiConfig`], base URL resolution from `API_URL` |
//! | [`error`] | [`ApiError`], [`ErrorEnvelope`], fallback messages |
//! | [`models`] | [`Profile`], [`SafeProfile`] and the nested records |

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::{ProfileClient, ProfileSource, AUTH_HEADER};
pub use config::ApiConfig;
pub use error::{ApiError, ErrorEnvelope, LOGIN_FALLBACK_MESSAGE, PROFILE_FALLBACK_MESSAGE};
pub use models::{Activity, Goal, Note, Profile, SafeProfile, SocialLink, DEFAULT_TIME_SPENT};
