//! # HTTP client for the dashboard backend
//!
//! [`ProfileClient`] wraps a [`reqwest::Client`] and an [`ApiConfig`]. It
//! speaks two endpoints:
//!
//! | Method | Path | Credential | Success body |
//! |--------|------|------------|--------------|
//! | `GET` | `/api/profile` | `x-auth-token` header | [`Profile`] |
//! | `POST` | `/api/auth` | none, JSON [`LoginRequest`] | [`AuthToken`] |
//!
//! Any non-2xx status is an [`ApiError::Status`] carrying whatever
//! [`ErrorEnvelope`] the body held, whatever the status code.
//!
//! Views depend on the [`ProfileSource`] trait rather than the concrete client
//! so loader logic can run against a stub in tests.

use std::future::Future;

use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{ApiError, ErrorEnvelope};
use crate::models::{AuthToken, LoginRequest, Profile};

/// Header carrying the session token.
pub const AUTH_HEADER: &str = "x-auth-token";

pub const PROFILE_PATH: &str = "/api/profile";
pub const LOGIN_PATH: &str = "/api/auth";

/// Anything that can fetch the signed-in user's profile.
pub trait ProfileSource {
    fn fetch_profile(&self, token: &str) -> impl Future<Output = Result<Profile, ApiError>>;
}

/// reqwest-backed client for the dashboard API.
#[derive(Debug, Clone)]
pub struct ProfileClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ProfileClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Exchange email and password for a session token.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let url = self.config.endpoint(LOGIN_PATH);
        tracing::debug!("POST {}", url);

        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self.http.post(url).json(&body).send().await?;
        let auth: AuthToken = read_json(response).await?;
        Ok(auth.token)
    }
}

impl ProfileSource for ProfileClient {
    async fn fetch_profile(&self, token: &str) -> Result<Profile, ApiError> {
        let url = self.config.endpoint(PROFILE_PATH);
        tracing::debug!("GET {}", url);

        let response = self.http.get(url).header(AUTH_HEADER, token).send().await?;
        // A literal `null` body reads as an empty profile.
        let profile: Option<Profile> = read_json(response).await?;
        Ok(profile.unwrap_or_default())
    }
}

/// Read the whole body, then decode it as `T` or as a failure envelope.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            envelope: ErrorEnvelope::parse(&body),
        });
    }

    Ok(serde_json::from_slice(&body)?)
}
