use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - the parent content comments attach to.
///
/// Posts are owned by the post-management service; this crate only reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Opaque identifier assigned by the owning service.
    pub id: String,
    pub user_id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a post with the given id, stamped with the current time.
    pub fn new(id: impl Into<String>, user_id: Uuid, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            user_id,
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}
