//! # Resource Endpoints
//!
//! Listing, upload and download of workflow files under `/api/resources/`.

use std::borrow::Cow;

use reqwest::header::{HeaderName, CONTENT_DISPOSITION, CONTENT_TYPE};
use reqwest::multipart::Form;
use shared::{NewResource, Resource, ResourceFilters, ResourceUpdate};

use super::client::{file_part, read_json, segment, ApiClient};
use crate::core::error::{AppError, Result};

/// A downloaded resource file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedFile {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
    /// From `Content-Disposition`, when the backend sent one
    pub file_name: Option<String>,
}

/// List resources, optionally filtered by search text and tool.
#[tracing::instrument(skip(client))]
pub async fn get_resources(client: &ApiClient, filters: &ResourceFilters) -> Result<Vec<Resource>> {
    let start = std::time::Instant::now();

    let response = client
        .send(
            client.get("/api/resources/").query(&filters.to_query()),
            "Failed to fetch resources",
        )
        .await?;
    let resources: Vec<Resource> = read_json(response).await?;

    tracing::debug!(
        duration_ms = start.elapsed().as_millis(),
        resource_count = resources.len(),
        "Resources fetched successfully"
    );
    Ok(resources)
}

/// Resources uploaded by the signed-in user.
#[tracing::instrument(skip(client))]
pub async fn get_user_resources(client: &ApiClient) -> Result<Vec<Resource>> {
    let response = client
        .send(
            client.get("/api/resources/user/"),
            "Failed to fetch user resources",
        )
        .await?;
    read_json(response).await
}

/// Download the file behind a resource. The detail endpoint streams the
/// file itself, not its metadata.
#[tracing::instrument(skip(client))]
pub async fn download_resource(client: &ApiClient, id: &str) -> Result<DownloadedFile> {
    let start = std::time::Instant::now();

    let response = client
        .send(
            client.get(&format!("/api/resources/{}/", segment(id))),
            "Failed to download resource",
        )
        .await?;

    let header = |name: HeaderName| {
        response
            .headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };
    let content_type = header(CONTENT_TYPE);
    let file_name = header(CONTENT_DISPOSITION).and_then(|value| disposition_file_name(&value));

    let bytes = response.bytes().await?.to_vec();
    tracing::info!(
        duration_ms = start.elapsed().as_millis(),
        size = bytes.len(),
        file_name = ?file_name,
        "Resource downloaded"
    );

    Ok(DownloadedFile {
        bytes,
        content_type,
        file_name,
    })
}

/// Upload a new resource (multipart).
#[tracing::instrument(skip(client, resource), fields(title = %resource.title, tool = resource.tool.as_str()))]
pub async fn create_resource(client: &ApiClient, resource: &NewResource) -> Result<Resource> {
    if resource.title.trim().is_empty() {
        return Err(AppError::Validation("Title is required".to_string()));
    }
    if resource.file.bytes.is_empty() {
        return Err(AppError::Validation("Resource file is empty".to_string()));
    }

    let mut form = Form::new()
        .text("title", resource.title.clone())
        .text("tool", resource.tool.as_str());
    if let Some(description) = &resource.description {
        form = form.text("description", description.clone());
    }
    form = form.part("file", file_part(&resource.file)?);

    let response = client
        .send(
            client.post("/api/resources/").multipart(form),
            "Failed to create resource",
        )
        .await?;
    let created: Resource = read_json(response).await?;
    tracing::info!(resource_id = %created.id, "Resource created");
    Ok(created)
}

#[tracing::instrument(skip(client, update))]
pub async fn update_resource(
    client: &ApiClient,
    id: &str,
    update: &ResourceUpdate,
) -> Result<Resource> {
    let response = client
        .send(
            client.put(&format!("/api/resources/{}/", segment(id))).json(update),
            "Failed to update resource",
        )
        .await?;
    read_json(response).await
}

#[tracing::instrument(skip(client))]
pub async fn delete_resource(client: &ApiClient, id: &str) -> Result<()> {
    client
        .send(
            client.delete(&format!("/api/resources/{}/", segment(id))),
            "Failed to delete resource",
        )
        .await?;
    Ok(())
}

/// File name from a `Content-Disposition` value. `filename*` (RFC 5987)
/// wins over `filename`.
pub fn disposition_file_name(value: &str) -> Option<String> {
    let mut plain = None;
    for param in value.split(';').map(str::trim) {
        let Some((key, raw)) = param.split_once('=') else {
            continue;
        };
        match key.trim().to_ascii_lowercase().as_str() {
            "filename*" => {
                // charset'language'percent-encoded
                let decoded = raw
                    .trim()
                    .splitn(3, '\'')
                    .nth(2)
                    .and_then(|encoded| urlencoding::decode(encoded).ok())
                    .map(Cow::into_owned)
                    .filter(|name| !name.is_empty());
                if decoded.is_some() {
                    return decoded;
                }
            }
            "filename" => {
                let name = raw.trim().trim_matches('"');
                if !name.is_empty() {
                    plain = Some(name.to_string());
                }
            }
            _ => {}
        }
    }
    plain
}
