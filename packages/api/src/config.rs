//! API endpoint configuration from the environment.

/// Base URL used when nothing is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Where the backend lives.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Explicit base URL. Trailing slashes are dropped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve `API_URL` from, in order: a `.env` file or the process
    /// environment (native only), the value baked in at compile time, and
    /// finally [`DEFAULT_API_URL`].
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        dotenvy::dotenv().ok();

        let configured = |url: &&str| !url.trim().is_empty();
        let runtime = std::env::var("API_URL").ok();
        let base_url = runtime
            .as_deref()
            .filter(configured)
            .or(option_env!("API_URL").filter(configured))
            .unwrap_or(DEFAULT_API_URL);

        tracing::debug!("Using API base URL {}", base_url);
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/api/profile`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
