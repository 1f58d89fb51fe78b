//! # Request errors and the server error envelope
//!
//! The backend reports failures as
//!
//! ```json
//! { "errors": [ { "msg": "Token invalid" } ] }
//! ```
//!
//! [`ApiError`] keeps the three ways a request can go wrong apart for logging,
//! while [`ApiError::message_or`] collapses them into the single line of text
//! the UI shows: the first envelope message when the server sent one, the
//! caller's fallback otherwise.

use serde::Deserialize;
use thiserror::Error;

/// Message shown when a profile load fails without a server-provided reason.
pub const PROFILE_FALLBACK_MESSAGE: &str = "Failed to load profile";

/// Message shown when a login fails without a server-provided reason.
pub const LOGIN_FALLBACK_MESSAGE: &str = "Login failed";

/// Conventional failure body.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub msg: Option<String>,
}

impl ErrorEnvelope {
    /// Parse a response body, `None` if it is not an envelope.
    pub fn parse(body: &[u8]) -> Option<Self> {
        serde_json::from_slice(body).ok()
    }

    /// `errors[0].msg`, ignoring empty strings.
    pub fn first_message(&self) -> Option<&str> {
        self.errors
            .first()?
            .msg
            .as_deref()
            .filter(|msg| !msg.is_empty())
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded with status {status}")]
    Status {
        status: u16,
        envelope: Option<ErrorEnvelope>,
    },

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// User-facing message: the envelope's first message, else `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                envelope: Some(envelope),
                ..
            } => envelope.first_message().unwrap_or(fallback).to_string(),
            _ => fallback.to_string(),
        }
    }

    /// HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server rejected the credential.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_error(status: u16, body: &str) -> ApiError {
        ApiError::Status {
            status,
            envelope: ErrorEnvelope::parse(body.as_bytes()),
        }
    }

    #[test]
    fn test_envelope_message_wins() {
        let err = status_error(401, r#"{"errors":[{"msg":"Token invalid"}]}"#);
        assert_eq!(err.message_or(PROFILE_FALLBACK_MESSAGE), "Token invalid");
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_only_first_message_is_used() {
        let err = status_error(400, r#"{"errors":[{"msg":"first"},{"msg":"second"}]}"#);
        assert_eq!(err.message_or(PROFILE_FALLBACK_MESSAGE), "first");
    }

    #[test]
    fn test_fallback_when_envelope_is_unusable() {
        for body in [
            "",
            "<html>Bad Gateway</html>",
            "{}",
            r#"{"errors":[]}"#,
            r#"{"errors":[{}]}"#,
            r#"{"errors":[{"msg":""}]}"#,
            r#"{"errors":"nope"}"#,
            r#"{"msg":"not wrapped"}"#,
        ] {
            let err = status_error(500, body);
            assert_eq!(
                err.message_or(PROFILE_FALLBACK_MESSAGE),
                PROFILE_FALLBACK_MESSAGE,
                "body: {body}"
            );
        }
    }

    #[test]
    fn test_decode_error_uses_fallback() {
        let err = ApiError::from(serde_json::from_str::<u32>("oops").unwrap_err());
        assert_eq!(err.message_or(PROFILE_FALLBACK_MESSAGE), PROFILE_FALLBACK_MESSAGE);
        assert_eq!(err.status(), None);
        assert!(!err.is_unauthorized());
    }
}
