use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dto::resources::FileUpload;

/// Publication status of a post
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
            PostStatus::Archived => "archived",
        }
    }
}

/// A related object the backend may send either nested or as a bare id.
///
/// Read endpoints nest the related record, write endpoints echo the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Related<T> {
    Nested(T),
    Id(String),
}

/// Records that carry their own identifier
pub trait Identified {
    fn id(&self) -> &str;
}

impl<T: Identified> Related<T> {
    /// Identifier of the related record, nested or not
    pub fn id(&self) -> &str {
        match self {
            Related::Nested(inner) => inner.id(),
            Related::Id(id) => id,
        }
    }

    /// The nested record, when the backend sent it
    pub fn nested(&self) -> Option<&T> {
        match self {
            Related::Nested(inner) => Some(inner),
            Related::Id(_) => None,
        }
    }
}

/// Blog post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Related<PostCategory>>,
    #[serde(default)]
    pub resources: Vec<Related<PostResource>>,
    #[serde(default)]
    pub tags: Vec<Related<Tag>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PostStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

impl Post {
    /// Short preview of the content for list views
    pub fn excerpt(&self, max_chars: usize) -> String {
        crate::utils::excerpt(&self.content, max_chars)
    }
}

/// Category as nested inside a post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostCategory {
    pub id: String,
    pub name: String,
    pub slug: String,
}

impl Identified for PostCategory {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Resource as nested inside a post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostResource {
    pub id: String,
    pub title: String,
    pub file: String,
}

impl Identified for PostResource {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Filters for the post listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilters {
    /// Full-text search over title and content
    pub search: Option<String>,
    /// Category slug
    pub category: Option<String>,
}

impl PostFilters {
    /// Query parameters understood by the backend. Empty values are dropped.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            params.push(("search", search.to_string()));
        }
        if let Some(category) = self.category.as_deref().filter(|s| !s.is_empty()) {
            params.push(("category__slug", category.to_string()));
        }
        params
    }
}

/// New post, sent as multipart form data
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub title: String,
    pub slug: String,
    pub content: String,
    /// Category id
    pub category: String,
    pub status: Option<PostStatus>,
    pub video_url: Option<String>,
    /// Tag ids
    pub tags: Vec<String>,
    /// Resource ids
    pub resources: Vec<String>,
    pub image: Option<FileUpload>,
}

/// Full or partial post update (PUT with JSON body)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PostStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Category with its post count
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub post_count: u64,
}

/// Category create/update body
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Tag
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub slug: String,
}

impl Identified for Tag {
    fn id(&self) -> &str {
        &self.id
    }
}
