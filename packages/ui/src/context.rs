//! Shared services handed to views through the Dioxus context.
//!
//! The app root provides one [`Credentials`] and one [`api::ProfileClient`];
//! views reach them with [`use_credentials`] and [`use_profile_client`].

use std::rc::Rc;

use dioxus::prelude::*;
use store::CredentialStore;

/// Type-erased credential store, cheap to clone into closures.
#[derive(Clone)]
pub struct Credentials(Rc<dyn CredentialStore>);

impl Credentials {
    pub fn new(store: impl CredentialStore + 'static) -> Self {
        Self(Rc::new(store))
    }
}

impl CredentialStore for Credentials {
    fn token(&self) -> Option<String> {
        self.0.token()
    }

    fn set_token(&self, token: &str) {
        self.0.set_token(token)
    }

    fn clear_token(&self) {
        self.0.clear_token()
    }
}

/// Create the platform-appropriate credential store.
///
/// - **Web** (WASM + `web` feature): `window.localStorage`
/// - **Native**: `<data_dir>/devboard/credentials.toml`
/// - **WASM without `web`**: in memory only
pub fn make_credentials() -> Credentials {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Credentials::new(store::LocalStorageCredentials::new())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        Credentials::new(store::MemoryCredentials::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("devboard");
        Credentials::new(store::FileCredentials::new(base))
    }
}

pub fn use_credentials() -> Credentials {
    use_context::<Credentials>()
}

pub fn use_profile_client() -> api::ProfileClient {
    use_context::<api::ProfileClient>()
}
