//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use remark_core::domain::{Comment, NewComment, Post};
use remark_core::error::RepoError;
use remark_core::ports::{CommentRepository, PostRepository};

use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::post::Entity as PostEntity;
use super::postgres_base::{PostgresBaseRepository, write_error};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// PostgreSQL comment repository.
pub type PostgresCommentRepository = PostgresBaseRepository<CommentEntity>;

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError> {
        tracing::debug!(post_id = %id, "Finding post by id");
        self.fetch_by_id(id.to_string()).await
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn create(&self, comment: NewComment) -> Result<Comment, RepoError> {
        let active_model: comment::ActiveModel = comment.into();
        let model = active_model.insert(self.db.as_ref()).await.map_err(write_error)?;

        tracing::debug!(comment_id = %model.id, post_id = %model.post_id, "Comment stored");
        Ok(model.into())
    }

    async fn find_by_post_id(&self, post_id: &str) -> Result<Vec<Comment>, RepoError> {
        let result = CommentEntity::find()
            .filter(comment::Column::PostId.eq(post_id))
            .order_by_desc(comment::Column::CreatedAt)
            .order_by_desc(comment::Column::Seq)
            .all(self.db.as_ref())
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
