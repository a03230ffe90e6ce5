use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Automation tool a resource was built for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Tool {
    #[serde(rename = "Relevance AI")]
    RelevanceAi,
    #[serde(rename = "Make")]
    Make,
    #[serde(rename = "n8n")]
    N8n,
    #[serde(rename = "Other")]
    Other,
}

impl Tool {
    pub fn all() -> &'static [Tool] {
        &[Tool::RelevanceAi, Tool::Make, Tool::N8n, Tool::Other]
    }

    /// Wire value, also used as the `tool` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Tool::RelevanceAi => "Relevance AI",
            Tool::Make => "Make",
            Tool::N8n => "n8n",
            Tool::Other => "Other",
        }
    }
}

/// Downloadable resource (a JSON workflow file)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resource {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub tool: Tool,
    /// File URL
    pub file: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Filters for the resource listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceFilters {
    pub search: Option<String>,
    pub tool: Option<Tool>,
    /// Sort key, passed through as `sortBy`
    pub sort_by: Option<String>,
}

impl ResourceFilters {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            params.push(("search", search.to_string()));
        }
        if let Some(tool) = self.tool {
            params.push(("tool", tool.as_str().to_string()));
        }
        if let Some(sort_by) = self.sort_by.as_deref().filter(|s| !s.is_empty()) {
            params.push(("sortBy", sort_by.to_string()));
        }
        params
    }
}

/// Resource metadata update (PUT with JSON body). The file itself is not replaced.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool: Option<Tool>,
}

/// New resource, sent as multipart form data
#[derive(Debug, Clone)]
pub struct NewResource {
    pub title: String,
    pub description: Option<String>,
    pub tool: Tool,
    pub file: FileUpload,
}

/// In-memory file for multipart uploads
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
    /// Explicit MIME type; guessed from the file name when `None`
    pub content_type: Option<String>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
            content_type: None,
        }
    }
}
