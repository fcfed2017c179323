//! Comment use cases.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Comment, NewComment};
use crate::error::DomainError;
use crate::ports::{CommentRepository, PostRepository};

/// Creates and lists comments on posts.
#[derive(Clone)]
pub struct CommentService {
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl CommentService {
    pub fn new(posts: Arc<dyn PostRepository>, comments: Arc<dyn CommentRepository>) -> Self {
        Self { posts, comments }
    }

    /// Validate the input, check that the post exists, then store the comment.
    ///
    /// Not idempotent: every successful call produces a new record.
    pub async fn create_comment(
        &self,
        post_id: &str,
        text: &str,
        user_id: Uuid,
    ) -> Result<Comment, DomainError> {
        let draft = NewComment::new(text, user_id, post_id);
        draft.validate()?;

        self.ensure_post_exists(post_id).await?;

        Ok(self.comments.create(draft).await?)
    }

    /// List the comments attached to an existing post, newest first.
    pub async fn list_comments(&self, post_id: &str) -> Result<Vec<Comment>, DomainError> {
        self.ensure_post_exists(post_id).await?;

        Ok(self.comments.find_by_post_id(post_id).await?)
    }

    // The check and the later write are not transactional; a post deleted in
    // between still receives the comment.
    async fn ensure_post_exists(&self, post_id: &str) -> Result<(), DomainError> {
        match self.posts.find_by_id(post_id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::NotFound {
                entity_type: "Post",
                id: post_id.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::Utc;

    use super::*;
    use crate::domain::Post;
    use crate::error::RepoError;

    struct StubPosts(Vec<String>);

    #[async_trait]
    impl PostRepository for StubPosts {
        async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError> {
            Ok(self
                .0
                .iter()
                .find(|p| p.as_str() == id)
                .map(|p| Post::new(p.clone(), Uuid::new_v4(), "post")))
        }
    }

    #[derive(Default)]
    struct StubComments(Mutex<Vec<Comment>>);

    #[async_trait]
    impl CommentRepository for StubComments {
        async fn create(&self, comment: NewComment) -> Result<Comment, RepoError> {
            let stored = comment.into_comment(Uuid::new_v4(), Utc::now());
            self.0.lock().unwrap().push(stored.clone());
            Ok(stored)
        }

        async fn find_by_post_id(&self, post_id: &str) -> Result<Vec<Comment>, RepoError> {
            Ok(self
                .0
                .lock()
                .unwrap()
                .iter()
                .filter(|c| c.post_id == post_id)
                .cloned()
                .collect())
        }
    }

    struct BrokenComments;

    #[async_trait]
    impl CommentRepository for BrokenComments {
        async fn create(&self, _comment: NewComment) -> Result<Comment, RepoError> {
            Err(RepoError::Connection("connection reset".to_string()))
        }

        async fn find_by_post_id(&self, _post_id: &str) -> Result<Vec<Comment>, RepoError> {
            Err(RepoError::Query("timeout".to_string()))
        }
    }

    fn service() -> (CommentService, Arc<StubComments>) {
        let comments = Arc::new(StubComments::default());
        let service = CommentService::new(
            Arc::new(StubPosts(vec!["123".to_string()])),
            comments.clone(),
        );
        (service, comments)
    }

    #[tokio::test]
    async fn test_create_comment_stores_author_and_post() {
        let (service, store) = service();
        let user_id = Uuid::new_v4();

        let comment = service
            .create_comment("123", "nice post", user_id)
            .await
            .unwrap();

        assert_eq!(comment.text, "nice post");
        assert_eq!(comment.post_id, "123");
        assert_eq!(comment.user_id, user_id);
        assert_eq!(store.0.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_comment_is_not_idempotent() {
        let (service, store) = service();
        let user_id = Uuid::new_v4();

        let first = service.create_comment("123", "same", user_id).await.unwrap();
        let second = service.create_comment("123", "same", user_id).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.0.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_create_comment_validates_before_lookup() {
        let (service, store) = service();

        // Unknown post and empty text: validation wins.
        let err = service
            .create_comment("999", "", Uuid::new_v4())
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(ref e) if e[0].field == "text"));
        assert!(store.0.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_comment_on_missing_post() {
        let (service, store) = service();

        let err = service
            .create_comment("999", "hello", Uuid::new_v4())
            .await
            .unwrap_err();

        assert!(
            matches!(err, DomainError::NotFound { entity_type: "Post", ref id } if id == "999")
        );
        assert!(store.0.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_comments_on_missing_post() {
        let (service, _) = service();

        let err = service.list_comments("999").await.unwrap_err();

        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_comments_empty() {
        let (service, _) = service();

        let comments = service.list_comments("123").await.unwrap();

        assert!(comments.is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_becomes_internal() {
        let service = CommentService::new(
            Arc::new(StubPosts(vec!["123".to_string()])),
            Arc::new(BrokenComments),
        );

        let create = service.create_comment("123", "hi", Uuid::new_v4()).await;
        let list = service.list_comments("123").await;

        assert!(matches!(create, Err(DomainError::Internal(_))));
        assert!(matches!(list, Err(DomainError::Internal(_))));
    }
}
