//! # Account Endpoints
//!
//! Signup and user management under `/api/accounts/users/`.

use shared::{NewUser, User, UserUpdate};

use super::client::{read_json, segment, ApiClient};
use crate::core::error::{AppError, Result};
use crate::utils::validation;

/// Create an account. The form is validated first; the backend does not
/// log the new user in.
#[tracing::instrument(skip(client, new_user), fields(email = %new_user.email))]
pub async fn signup(client: &ApiClient, new_user: &NewUser) -> Result<User> {
    validation::validate_signup(new_user)?;

    let response = client
        .send(
            client.post("/api/accounts/users/").json(new_user),
            "Signup failed",
        )
        .await?;
    let user: User = read_json(response).await?;
    tracing::info!(user_id = %user.id, "Account created");
    Ok(user)
}

#[tracing::instrument(skip(client))]
pub async fn get_all_users(client: &ApiClient) -> Result<Vec<User>> {
    let response = client
        .send(client.get("/api/accounts/users/"), "Failed to fetch users")
        .await?;
    let users: Vec<User> = read_json(response).await?;
    tracing::debug!(count = users.len(), "Users fetched");
    Ok(users)
}

#[tracing::instrument(skip(client))]
pub async fn get_user_by_id(client: &ApiClient, id: &str) -> Result<User> {
    let response = client
        .send(
            client.get(&format!("/api/accounts/users/{}/", segment(id))),
            "Failed to fetch user",
        )
        .await?;
    read_json(response).await
}

/// Partial update (PATCH); only the fields set in `update` are sent.
#[tracing::instrument(skip(client, update))]
pub async fn update_user(client: &ApiClient, id: &str, update: &UserUpdate) -> Result<User> {
    if update.is_empty() {
        return Err(AppError::Validation("Nothing to update".to_string()));
    }

    let response = client
        .send(
            client
                .patch(&format!("/api/accounts/users/{}/", segment(id)))
                .json(update),
            "Failed to update user",
        )
        .await?;
    read_json(response).await
}

#[tracing::instrument(skip(client))]
pub async fn delete_user(client: &ApiClient, id: &str) -> Result<()> {
    client
        .send(
            client.delete(&format!("/api/accounts/users/{}/", segment(id))),
            "Failed to delete user",
        )
        .await?;
    tracing::info!(user_id = %id, "User deleted");
    Ok(())
}
