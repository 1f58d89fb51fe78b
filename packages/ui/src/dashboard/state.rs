//! # Dashboard state and loading
//!
//! The dashboard moves through a small, one-way state machine per mount:
//!
//! ```text
//! Loading ──▶ SignedOut   (no stored token, nothing rendered)
//!         ──▶ Failed(msg) (request, status or decode failure)
//!         ──▶ Ready(..)   (profile loaded)
//! ```
//!
//! [`load_dashboard`] runs the session guard and the single profile request
//! against any [`CredentialStore`] / [`ProfileSource`] pair, and
//! [`DashboardState::from_outcome`] turns the result into the next state in one
//! assignment, so "not loading" always means the request has settled.

use api::{ApiError, Goal, Note, Profile, ProfileSource, SafeProfile, PROFILE_FALLBACK_MESSAGE};
use futures::future::{AbortRegistration, Abortable, Aborted};
use store::CredentialStore;

/// Everything the dashboard can be showing.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardState {
    Loading,
    SignedOut,
    Failed(String),
    Ready(ReadyState),
}

impl DashboardState {
    pub fn from_outcome(outcome: LoadOutcome) -> Self {
        match outcome {
            LoadOutcome::Unauthenticated => DashboardState::SignedOut,
            LoadOutcome::Loaded(profile) => DashboardState::Ready(ReadyState::new(profile)),
            LoadOutcome::Failed(err) => {
                DashboardState::Failed(err.message_or(PROFILE_FALLBACK_MESSAGE))
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DashboardState::Loading)
    }
}

/// View state once the profile has loaded.
///
/// Goals are seeded from the profile once and then live on their own; notes
/// stay inside the profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadyState {
    profile: Profile,
    goals: Vec<Goal>,
}

impl ReadyState {
    pub fn new(profile: Profile) -> Self {
        let goals = profile.goals.clone().unwrap_or_default();
        Self { profile, goals }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Defaulted view of the current profile.
    pub fn safe_profile(&self) -> SafeProfile {
        SafeProfile::from(&self.profile)
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn set_goals(&mut self, goals: Vec<Goal>) {
        self.goals = goals;
    }

    /// Replace the notes, keeping every other field as currently rendered.
    pub fn set_notes(&mut self, notes: Vec<Note>) {
        self.profile = Profile::from(SafeProfile {
            notes,
            ..self.safe_profile()
        });
    }
}

/// Result of one load attempt.
#[derive(Debug)]
pub enum LoadOutcome {
    Unauthenticated,
    Loaded(Profile),
    Failed(ApiError),
}

/// The stored token, treating an empty string as absent.
pub fn session_token<C: CredentialStore + ?Sized>(credentials: &C) -> Option<String> {
    credentials.token().filter(|token| !token.is_empty())
}

/// Check the session, then fetch the profile exactly once.
pub async fn load_dashboard<C, S>(credentials: &C, source: &S) -> LoadOutcome
where
    C: CredentialStore + ?Sized,
    S: ProfileSource,
{
    let Some(token) = session_token(credentials) else {
        tracing::debug!("No session token, skipping profile request");
        return LoadOutcome::Unauthenticated;
    };

    match source.fetch_profile(&token).await {
        Ok(profile) => LoadOutcome::Loaded(profile),
        Err(e) => {
            if e.is_unauthorized() {
                tracing::warn!("Profile request rejected the session token: {}", e);
            } else {
                tracing::warn!("Failed to load profile: {}", e);
            }
            LoadOutcome::Failed(e)
        }
    }
}

/// [`load_dashboard`] that resolves to `None` once `registration` is aborted.
pub async fn load_until_aborted<C, S>(
    credentials: &C,
    source: &S,
    registration: AbortRegistration,
) -> Option<LoadOutcome>
where
    C: CredentialStore + ?Sized,
    S: ProfileSource,
{
    match Abortable::new(load_dashboard(credentials, source), registration).await {
        Ok(outcome) => Some(outcome),
        Err(Aborted) => {
            tracing::debug!("Dashboard torn down before the profile request settled");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::future::Future;

    use api::{ErrorEnvelope, SocialLink};
    use futures::future::AbortHandle;
    use store::MemoryCredentials;

    use super::*;

    /// Canned responses that count how often they were asked.
    struct StubSource<F> {
        respond: F,
        calls: Cell<usize>,
        seen_token: std::cell::RefCell<Option<String>>,
    }

    impl<F: Fn() -> Result<Profile, ApiError>> StubSource<F> {
        fn new(respond: F) -> Self {
            Self {
                respond,
                calls: Cell::new(0),
                seen_token: Default::default(),
            }
        }
    }

    impl<F: Fn() -> Result<Profile, ApiError>> ProfileSource for StubSource<F> {
        fn fetch_profile(&self, token: &str) -> impl Future<Output = Result<Profile, ApiError>> {
            self.calls.set(self.calls.get() + 1);
            *self.seen_token.borrow_mut() = Some(token.to_string());
            std::future::ready((self.respond)())
        }
    }

    /// A source whose request never settles.
    struct PendingSource;

    impl ProfileSource for PendingSource {
        fn fetch_profile(&self, _token: &str) -> impl Future<Output = Result<Profile, ApiError>> {
            std::future::pending()
        }
    }

    fn alice() -> Profile {
        Profile {
            github_username: Some("alice".to_string()),
            streak: Some(5),
            ..Profile::default()
        }
    }

    fn unauthorized(msg: &str) -> ApiError {
        let body = format!(r#"{{"errors":[{{"msg":"{msg}"}}]}}"#);
        ApiError::Status {
            status: 401,
            envelope: ErrorEnvelope::parse(body.as_bytes()),
        }
    }

    #[tokio::test]
    async fn test_missing_token_skips_request() {
        let source = StubSource::new(|| Ok(alice()));
        let outcome = load_dashboard(&MemoryCredentials::new(), &source).await;

        assert!(matches!(outcome, LoadOutcome::Unauthenticated));
        assert_eq!(source.calls.get(), 0);
        assert_eq!(DashboardState::from_outcome(outcome), DashboardState::SignedOut);
    }

    #[tokio::test]
    async fn test_empty_token_counts_as_missing() {
        let source = StubSource::new(|| Ok(alice()));
        let outcome = load_dashboard(&MemoryCredentials::with_token(""), &source).await;

        assert!(matches!(outcome, LoadOutcome::Unauthenticated));
        assert_eq!(source.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_token_is_forwarded_once() {
        let source = StubSource::new(|| Ok(alice()));
        let outcome = load_dashboard(&MemoryCredentials::with_token("abc"), &source).await;

        assert_eq!(source.calls.get(), 1);
        assert_eq!(source.seen_token.borrow().as_deref(), Some("abc"));

        let DashboardState::Ready(ready) = DashboardState::from_outcome(outcome) else {
            panic!("expected ready state");
        };
        assert_eq!(
            ready.safe_profile(),
            SafeProfile {
                github_username: "alice".to_string(),
                streak: 5,
                ..SafeProfile::default()
            }
        );
        assert!(ready.goals().is_empty());
    }

    #[tokio::test]
    async fn test_envelope_message_becomes_error_state() {
        let source = StubSource::new(|| Err(unauthorized("Token invalid")));
        let outcome = load_dashboard(&MemoryCredentials::with_token("stale"), &source).await;

        assert_eq!(
            DashboardState::from_outcome(outcome),
            DashboardState::Failed("Token invalid".to_string())
        );
    }

    #[tokio::test]
    async fn test_failure_without_envelope_uses_fallback() {
        let source = StubSource::new(|| {
            Err(ApiError::Status {
                status: 500,
                envelope: None,
            })
        });
        let outcome = load_dashboard(&MemoryCredentials::with_token("abc"), &source).await;

        let state = DashboardState::from_outcome(outcome);
        assert_eq!(state, DashboardState::Failed("Failed to load profile".to_string()));
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn test_abort_drops_late_result() {
        let (handle, registration) = AbortHandle::new_pair();
        handle.abort();

        let credentials = MemoryCredentials::with_token("abc");
        let outcome = load_until_aborted(&credentials, &PendingSource, registration).await;
        assert!(outcome.is_none());
    }

    #[tokio::test]
    async fn test_unaborted_load_completes() {
        let (_handle, registration) = AbortHandle::new_pair();
        let source = StubSource::new(|| Ok(alice()));

        let credentials = MemoryCredentials::with_token("abc");
        let outcome = load_until_aborted(&credentials, &source, registration).await;
        assert!(matches!(outcome, Some(LoadOutcome::Loaded(_))));
    }

    #[test]
    fn test_goals_seeded_from_profile_then_independent() {
        let mut ready = ReadyState::new(Profile {
            goals: Some(vec![Goal::new("read a book")]),
            ..alice()
        });
        assert_eq!(ready.goals(), &[Goal::new("read a book")]);

        ready.set_goals(vec![Goal::new("ship v1"), Goal::new("sleep")]);
        assert_eq!(ready.goals().len(), 2);
        // The profile's copy is left as loaded
        assert_eq!(ready.profile().goals.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_notes_edit_keeps_other_fields() {
        let mut ready = ReadyState::new(Profile {
            social_links: Some(vec![SocialLink {
                platform: "github".to_string(),
                url: "https://github.com/alice".to_string(),
            }]),
            ..alice()
        });
        let before = ready.safe_profile();

        ready.set_notes(vec![Note::new("remember the milk")]);
        let after = ready.safe_profile();

        assert_eq!(after.notes, vec![Note::new("remember the milk")]);
        assert_eq!(
            after,
            SafeProfile {
                notes: after.notes.clone(),
                ..before
            }
        );
    }
}
