//! # Like Endpoints

use shared::{Like, NewLike};

use super::client::{read_json, segment, ApiClient};
use crate::core::error::Result;

/// Likes visible to the current user.
#[tracing::instrument(skip(client))]
pub async fn get_likes(client: &ApiClient) -> Result<Vec<Like>> {
    let response = client
        .send(client.get("/api/interactions/likes/"), "Failed to fetch likes")
        .await?;
    read_json(response).await
}

#[tracing::instrument(skip(client))]
pub async fn get_likes_by_post(client: &ApiClient, post_id: &str) -> Result<Vec<Like>> {
    let response = client
        .send(
            client.get(&format!("/api/interactions/likes/by-post/{}/", segment(post_id))),
            "Failed to fetch likes",
        )
        .await?;
    read_json(response).await
}

/// Like a post. Likes do not say who left them, so keep the returned id to
/// undo it with [`unlike_post`].
#[tracing::instrument(skip(client))]
pub async fn like_post(client: &ApiClient, post_id: &str) -> Result<Like> {
    let body = NewLike {
        post: post_id.to_string(),
    };
    let response = client
        .send(
            client.post("/api/interactions/likes/").json(&body),
            "Failed to like post",
        )
        .await?;
    read_json(response).await
}

/// Remove a like by its own id (not the post id).
#[tracing::instrument(skip(client))]
pub async fn unlike_post(client: &ApiClient, like_id: &str) -> Result<()> {
    client
        .send(
            client.delete(&format!("/api/interactions/likes/{}/", segment(like_id))),
            "Failed to remove like",
        )
        .await?;
    Ok(())
}
