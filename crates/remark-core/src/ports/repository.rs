use async_trait::async_trait;

use crate::domain::{Comment, NewComment, Post};
use crate::error::RepoError;

/// Read access to the post store.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find a post by its opaque ID.
    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError>;
}

/// Comment store.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Persist a new comment. The store assigns `id` and `created_at`.
    async fn create(&self, comment: NewComment) -> Result<Comment, RepoError>;

    /// All comments attached to a post, newest first.
    async fn find_by_post_id(&self, post_id: &str) -> Result<Vec<Comment>, RepoError>;
}
