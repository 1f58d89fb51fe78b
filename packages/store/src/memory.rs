use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::credentials::CredentialStore;

/// In-memory CredentialStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryCredentials {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `token`.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Arc::new(Mutex::new(Some(token.into()))),
        }
    }

    fn slot(&self) -> MutexGuard<'_, Option<String>> {
        self.token.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CredentialStore for MemoryCredentials {
    fn token(&self) -> Option<String> {
        self.slot().clone()
    }

    fn set_token(&self, token: &str) {
        *self.slot() = Some(token.to_string());
    }

    fn clear_token(&self) {
        *self.slot() = None;
    }
}
