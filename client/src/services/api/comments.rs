//! # Comment Endpoints
//!
//! Comments under `/api/interactions/comments/`.

use shared::{Comment, CommentUpdate, NewComment};

use super::client::{read_json, segment, ApiClient};
use crate::core::error::{AppError, Result};

/// Top-level comments of a post, each with its replies nested.
#[tracing::instrument(skip(client))]
pub async fn get_comments_by_post(client: &ApiClient, post_id: &str) -> Result<Vec<Comment>> {
    let response = client
        .send(
            client.get(&format!("/api/interactions/comments/by-post/{}/", segment(post_id))),
            "Failed to fetch comments",
        )
        .await?;
    let comments: Vec<Comment> = read_json(response).await?;
    tracing::debug!(count = comments.len(), "Comments fetched");
    Ok(comments)
}

#[tracing::instrument(skip(client, comment), fields(post = %comment.post))]
pub async fn create_comment(client: &ApiClient, comment: &NewComment) -> Result<Comment> {
    if comment.content.trim().is_empty() {
        return Err(AppError::Validation("Comment cannot be empty".to_string()));
    }

    let response = client
        .send(
            client.post("/api/interactions/comments/").json(comment),
            "Failed to create comment",
        )
        .await?;
    read_json(response).await
}

#[tracing::instrument(skip(client, content))]
pub async fn update_comment(client: &ApiClient, id: &str, content: &str) -> Result<Comment> {
    if content.trim().is_empty() {
        return Err(AppError::Validation("Comment cannot be empty".to_string()));
    }

    let body = CommentUpdate {
        content: content.to_string(),
    };
    let response = client
        .send(
            client
                .put(&format!("/api/interactions/comments/{}/", segment(id)))
                .json(&body),
            "Failed to update comment",
        )
        .await?;
    read_json(response).await
}

#[tracing::instrument(skip(client))]
pub async fn delete_comment(client: &ApiClient, id: &str) -> Result<()> {
    client
        .send(
            client.delete(&format!("/api/interactions/comments/{}/", segment(id))),
            "Failed to delete comment",
        )
        .await?;
    Ok(())
}
