use serde::{Deserialize, Serialize};

/// Email/password login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Google sign-in request carrying the Google ID token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoogleLoginRequest {
    pub token: String,
}

/// Login response (email and Google login share this shape)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// Bearer access token
    pub access: String,
    /// Paired refresh token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh: Option<String>,
    pub user: AuthUser,
}

/// User fields echoed by the login endpoints.
///
/// Email login returns all of them; Google login only returns the names and
/// the avatar, with `email` and `role` embedded in the token claims instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img_url: Option<String>,
}

/// Error payload.
///
/// The backend is not uniform: custom views answer `{"message": ..}`, the
/// framework answers `{"detail": ..}` and a few paths use `{"error": ..}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    /// First non-empty message, in `message`, `detail`, `error` order.
    pub fn best_message(&self) -> Option<&str> {
        [&self.message, &self.detail, &self.error]
            .into_iter()
            .filter_map(|m| m.as_deref())
            .find(|m| !m.trim().is_empty())
    }
}
