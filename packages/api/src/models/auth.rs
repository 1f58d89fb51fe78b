use serde::{Deserialize, Serialize};

/// Body of `POST /api/auth`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AuthToken {
    pub token: String,
}
