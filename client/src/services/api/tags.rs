//! # Tag Endpoint

use shared::Tag;

use super::client::{read_json, ApiClient};
use crate::core::error::Result;

#[tracing::instrument(skip(client))]
pub async fn get_tags(client: &ApiClient) -> Result<Vec<Tag>> {
    let response = client
        .send(client.get("/api/posts/tags/"), "Failed to fetch tags")
        .await?;
    read_json(response).await
}
