//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Request to create a comment on a post.
///
/// A missing or `null` `text` is left as `None` so that it is reported by
/// field validation rather than by the JSON parser.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// A stored comment as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    pub id: String,
    pub text: String,
    /// Author's user ID.
    pub user: String,
    /// Parent post ID.
    pub post: String,
    pub created_at: String,
}
