//! # Contact Endpoint

use shared::ContactMessage;

use super::client::ApiClient;
use crate::core::error::{AppError, Result};

/// Send the contact form. The sender is identified by the bearer token.
#[tracing::instrument(skip(client, message), fields(subject = %message.subject))]
pub async fn send_contact_message(client: &ApiClient, message: &ContactMessage) -> Result<()> {
    if message.subject.trim().is_empty() || message.message.trim().is_empty() {
        return Err(AppError::Validation(
            "Subject and message are required".to_string(),
        ));
    }

    client
        .send(
            client.post("/api/accounts/contact/").json(message),
            "Failed to send contact message",
        )
        .await?;
    tracing::info!("Contact message sent");
    Ok(())
}
