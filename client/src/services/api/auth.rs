//! # Authentication Endpoints
//!
//! Email/password and Google login. Neither touches the session; the caller
//! hands the response to [`crate::session::SessionStore::set_from_login`].

use shared::{GoogleLoginRequest, LoginRequest, LoginResponse};

use super::client::{read_json, ApiClient};
use crate::core::error::{AppError, Result};

/// Login with email and password.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<LoginResponse> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    let response = client
        .send(
            client.post("/api/accounts/login/").json(&request),
            "Login failed",
        )
        .await?;
    let login = checked(read_json::<LoginResponse>(response).await?)?;

    tracing::info!(duration_ms = start.elapsed().as_millis(), "Login successful");
    Ok(login)
}

/// Exchange a Google ID token for a backend session.
#[tracing::instrument(skip(client, id_token))]
pub async fn login_with_google(client: &ApiClient, id_token: &str) -> Result<LoginResponse> {
    tracing::info!("Attempting Google login");
    let start = std::time::Instant::now();

    let request = GoogleLoginRequest {
        token: id_token.to_string(),
    };

    let response = client
        .send(
            client.post("/api/accounts/auth/google/").json(&request),
            "Google login failed",
        )
        .await?;
    let login = checked(read_json::<LoginResponse>(response).await?)?;

    tracing::info!(
        duration_ms = start.elapsed().as_millis(),
        "Google login successful"
    );
    Ok(login)
}

/// A 2xx login body must carry a usable access token.
fn checked(login: LoginResponse) -> Result<LoginResponse> {
    if login.access.trim().is_empty() {
        tracing::error!("Login response carries an empty access token");
        return Err(AppError::MalformedResponse(
            "login response has an empty access token".to_string(),
        ));
    }
    Ok(login)
}
