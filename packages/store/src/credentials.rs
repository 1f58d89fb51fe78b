//! # Credential storage
//!
//! The dashboard authenticates with an opaque token that some earlier step (the
//! login view) placed in local persistent storage. This module defines the
//! seam through which every part of the app reaches that token, so views never
//! touch browser storage or the filesystem directly.
//!
//! | Implementation | Platform | Backing |
//! |----------------|----------|---------|
//! | [`crate::MemoryCredentials`] | all | process memory, used by tests |
//! | [`crate::FileCredentials`] | native | `credentials.toml` under a base directory |
//! | [`crate::LocalStorageCredentials`] | wasm + `web` | `window.localStorage` |
//!
//! ## Error handling
//!
//! Storage failures never propagate. Reads degrade to "no token" and writes
//! are logged and dropped, which sends the user back through the login flow
//! rather than crashing the view.

/// Key under which the token is stored.
pub const TOKEN_KEY: &str = "token";

/// Read/write access to the stored session token.
pub trait CredentialStore {
    /// The stored token, if any.
    fn token(&self) -> Option<String>;

    /// Persist `token`, replacing any previous value.
    fn set_token(&self, token: &str);

    /// Remove the stored token.
    fn clear_token(&self);
}

impl<T: CredentialStore + ?Sized> CredentialStore for std::rc::Rc<T> {
    fn token(&self) -> Option<String> {
        (**self).token()
    }

    fn set_token(&self, token: &str) {
        (**self).set_token(token)
    }

    fn clear_token(&self) {
        (**self).clear_token()
    }
}
