//! # Filesystem-backed credential store
//!
//! [`FileCredentials`] keeps the session token in a small TOML file so native
//! builds stay signed in across restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── credentials.toml      # token = "..."
//! ```
//!
//! A missing file, an unreadable file, or a file that fails to parse all read
//! as "no token".

use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::credentials::CredentialStore;

/// On-disk shape of `credentials.toml`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CredentialsFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
}

/// Filesystem-backed CredentialStore for desktop builds.
#[derive(Clone, Debug)]
pub struct FileCredentials {
    base: PathBuf,
}

impl FileCredentials {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// The well-known filename for the credentials file.
    pub fn filename() -> &'static str {
        "credentials.toml"
    }

    fn path(&self) -> PathBuf {
        self.base.join(Self::filename())
    }

    fn read(&self) -> CredentialsFile {
        let path = self.path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("Ignoring malformed {}: {}", path.display(), e);
                CredentialsFile::default()
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => CredentialsFile::default(),
            Err(e) => {
                tracing::error!("Failed to read {}: {}", path.display(), e);
                CredentialsFile::default()
            }
        }
    }

    fn write(&self, file: &CredentialsFile) {
        let path = self.path();
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::error!("Failed to create {}: {}", self.base.display(), e);
            return;
        }
        let contents = match toml::to_string_pretty(file) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::error!("Failed to serialize credentials: {}", e);
                return;
            }
        };
        if let Err(e) = std::fs::write(&path, contents) {
            tracing::error!("Failed to write {}: {}", path.display(), e);
        }
    }
}

impl CredentialStore for FileCredentials {
    fn token(&self) -> Option<String> {
        self.read().token
    }

    fn set_token(&self, token: &str) {
        self.write(&CredentialsFile {
            token: Some(token.to_string()),
        });
    }

    fn clear_token(&self) {
        self.write(&CredentialsFile::default());
    }
}
