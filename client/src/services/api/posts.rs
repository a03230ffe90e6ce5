//! # Post Endpoints
//!
//! Listing, detail and authoring of posts under `/api/posts/`.

use reqwest::multipart::Form;
use shared::{NewPost, Post, PostFilters, PostUpdate};

use super::client::{file_part, read_json, segment, ApiClient};
use crate::core::error::{AppError, Result};

/// List posts, optionally filtered by search text and category slug.
#[tracing::instrument(skip(client))]
pub async fn get_posts(client: &ApiClient, filters: &PostFilters) -> Result<Vec<Post>> {
    let start = std::time::Instant::now();

    let response = client
        .send(
            client.get("/api/posts/").query(&filters.to_query()),
            "Failed to fetch posts",
        )
        .await?;
    let posts: Vec<Post> = read_json(response).await?;

    tracing::debug!(
        duration_ms = start.elapsed().as_millis(),
        post_count = posts.len(),
        "Posts fetched successfully"
    );
    Ok(posts)
}

#[tracing::instrument(skip(client))]
pub async fn get_post_by_id(client: &ApiClient, id: &str) -> Result<Post> {
    let response = client
        .send(
            client.get(&format!("/api/posts/{}/", segment(id))),
            "Failed to fetch post",
        )
        .await?;
    read_json(response).await
}

/// Posts of one category, by slug.
pub async fn get_posts_by_category(client: &ApiClient, slug: &str) -> Result<Vec<Post>> {
    let filters = PostFilters {
        category: Some(slug.to_string()),
        ..Default::default()
    };
    get_posts(client, &filters).await
}

/// Create a post (multipart, so an image can be attached).
#[tracing::instrument(skip(client, post), fields(title = %post.title))]
pub async fn create_post(client: &ApiClient, post: &NewPost) -> Result<Post> {
    if post.title.trim().is_empty() || post.content.trim().is_empty() {
        return Err(AppError::Validation(
            "Title and content are required".to_string(),
        ));
    }

    let form = post_form(post)?;
    let response = client
        .send(
            client.post("/api/posts/").multipart(form),
            "Failed to create post",
        )
        .await?;
    let created: Post = read_json(response).await?;
    tracing::info!(post_id = %created.id, "Post created");
    Ok(created)
}

fn post_form(post: &NewPost) -> Result<Form> {
    let mut form = Form::new()
        .text("title", post.title.clone())
        .text("slug", post.slug.clone())
        .text("content", post.content.clone())
        .text("category", post.category.clone());

    if let Some(status) = post.status {
        form = form.text("status", status.as_str());
    }
    if let Some(video_url) = post.video_url.as_ref().filter(|url| !url.is_empty()) {
        form = form.text("video_url", video_url.clone());
    }
    // Many-to-many fields repeat the key once per id
    for tag in &post.tags {
        form = form.text("tags", tag.clone());
    }
    for resource in &post.resources {
        form = form.text("resources", resource.clone());
    }
    if let Some(image) = &post.image {
        form = form.part("image", file_part(image)?);
    }
    Ok(form)
}

#[tracing::instrument(skip(client, update))]
pub async fn update_post(client: &ApiClient, id: &str, update: &PostUpdate) -> Result<Post> {
    let response = client
        .send(
            client.put(&format!("/api/posts/{}/", segment(id))).json(update),
            "Failed to update post",
        )
        .await?;
    read_json(response).await
}

#[tracing::instrument(skip(client))]
pub async fn delete_post(client: &ApiClient, id: &str) -> Result<()> {
    client
        .send(
            client.delete(&format!("/api/posts/{}/", segment(id))),
            "Failed to delete post",
        )
        .await?;
    tracing::info!(post_id = %id, "Post deleted");
    Ok(())
}
