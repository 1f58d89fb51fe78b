//! # Browser `localStorage` credential store
//!
//! [`LocalStorageCredentials`] is the [`CredentialStore`] used on the web
//! platform. The token lives under [`TOKEN_KEY`] in `window.localStorage`, the
//! same slot the login flow writes to.
//!
//! Storage can be unavailable (private browsing, sandboxed iframes). In that
//! case reads return `None` and writes are logged and dropped.

use web_sys::Storage;

use crate::credentials::{CredentialStore, TOKEN_KEY};

/// `localStorage`-backed CredentialStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageCredentials;

impl LocalStorageCredentials {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl CredentialStore for LocalStorageCredentials {
    fn token(&self) -> Option<String> {
        Self::storage()?.get_item(TOKEN_KEY).ok().flatten()
    }

    fn set_token(&self, token: &str) {
        let Some(storage) = Self::storage() else {
            tracing::error!("localStorage unavailable, token not saved");
            return;
        };
        if let Err(e) = storage.set_item(TOKEN_KEY, token) {
            tracing::error!("Failed to save token: {:?}", e);
        }
    }

    fn clear_token(&self) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.remove_item(TOKEN_KEY) {
                tracing::error!("Failed to clear token: {:?}", e);
            }
        }
    }
}
