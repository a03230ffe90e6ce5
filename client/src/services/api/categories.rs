//! # Category Endpoints

use shared::{Category, CategoryInput};

use super::client::{read_json, segment, ApiClient};
use crate::core::error::Result;

#[tracing::instrument(skip(client))]
pub async fn get_categories(client: &ApiClient) -> Result<Vec<Category>> {
    let response = client
        .send(
            client.get("/api/posts/categories/"),
            "Failed to fetch categories",
        )
        .await?;
    let categories: Vec<Category> = read_json(response).await?;
    tracing::debug!(count = categories.len(), "Categories fetched");
    Ok(categories)
}

#[tracing::instrument(skip(client))]
pub async fn get_category_by_id(client: &ApiClient, id: &str) -> Result<Category> {
    let response = client
        .send(
            client.get(&format!("/api/posts/categories/{}/", segment(id))),
            "Failed to fetch category",
        )
        .await?;
    read_json(response).await
}

#[tracing::instrument(skip(client, category))]
pub async fn create_category(client: &ApiClient, category: &CategoryInput) -> Result<Category> {
    let response = client
        .send(
            client.post("/api/posts/categories/").json(category),
            "Failed to create category",
        )
        .await?;
    read_json(response).await
}

#[tracing::instrument(skip(client, category))]
pub async fn update_category(
    client: &ApiClient,
    id: &str,
    category: &CategoryInput,
) -> Result<Category> {
    let response = client
        .send(
            client
                .put(&format!("/api/posts/categories/{}/", segment(id)))
                .json(category),
            "Failed to update category",
        )
        .await?;
    read_json(response).await
}

#[tracing::instrument(skip(client))]
pub async fn delete_category(client: &ApiClient, id: &str) -> Result<()> {
    client
        .send(
            client.delete(&format!("/api/posts/categories/{}/", segment(id))),
            "Failed to delete category",
        )
        .await?;
    Ok(())
}
