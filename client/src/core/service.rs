//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use async_trait::async_trait;
use shared::{LoginResponse, User};

use crate::core::error::Result;

/// Backend operations the [`crate::app::App`] flows depend on.
///
/// Implemented by [`crate::services::api::ApiClient`]; tests substitute a
/// mock.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Login with email and password
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse>;

    /// Exchange a Google ID token for a backend session
    async fn login_with_google(&self, id_token: &str) -> Result<LoginResponse>;

    /// Fetch one user record
    async fn get_user_by_id(&self, id: &str) -> Result<User>;
}
