use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Comment on a post. Listing by post includes one level of replies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    pub id: String,
    /// Post id
    pub post: String,
    /// Author id or email, depending on the serializer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub replies: Vec<Comment>,
}

impl Comment {
    pub fn is_reply(&self) -> bool {
        self.parent_comment.is_some()
    }
}

/// New comment, optionally replying to another one
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewComment {
    pub post: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_comment: Option<String>,
}

/// Comment edit body; only the content can change
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommentUpdate {
    pub content: String,
}

/// Like on a post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Like {
    pub id: String,
    /// Post id
    pub post: String,
    /// The backend sets the liking user from the token and does not echo
    /// it, so this is normally absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Like request body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewLike {
    pub post: String,
}
