use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use remark_core::domain::{Comment, NewComment};
use remark_core::error::RepoError;
use remark_core::ports::CommentRepository;

/// Append-only comment store.
pub struct InMemoryCommentRepository {
    store: RwLock<Vec<Comment>>,
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Vec::new()),
        }
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

impl Default for InMemoryCommentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn create(&self, comment: NewComment) -> Result<Comment, RepoError> {
        let stored = comment.into_comment(Uuid::new_v4(), Utc::now());
        self.store.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_post_id(&self, post_id: &str) -> Result<Vec<Comment>, RepoError> {
        let store = self.store.read().await;

        // Walk newest insert first so the stable sort keeps that order on ties.
        let mut comments: Vec<Comment> = store
            .iter()
            .rev()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(comments)
    }
}
