//! Admin User Model

use serde::{Deserialize, Serialize};

/// Cached admin profile
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub username: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Body of `POST /auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Answer of `POST /auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default, alias = "Message")]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

/// Body of `POST /auth/verify`; the stored username is the whole credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyRequest {
    pub username: String,
}

/// Answer of `POST /auth/verify`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    pub valid: bool,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

fn default_true() -> bool {
    true
}
