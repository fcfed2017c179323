//! Comment entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use remark_core::domain::NewComment;

/// Comments keep a plain `post_id` column: no foreign key, no cascade.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub user_id: Uuid,
    #[sea_orm(indexed)]
    pub post_id: String,
    pub created_at: DateTimeWithTimeZone,
    /// Insert order, assigned by the database. Breaks `created_at` ties.
    pub seq: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Comment.
impl From<Model> for remark_core::domain::Comment {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            text: model.text,
            user_id: model.user_id,
            post_id: model.post_id,
            created_at: model.created_at.into(),
        }
    }
}

/// A new comment gets a fresh id; `created_at` and `seq` are left to column defaults.
impl From<NewComment> for ActiveModel {
    fn from(comment: NewComment) -> Self {
        Self {
            id: Set(Uuid::new_v4()),
            text: Set(comment.text),
            user_id: Set(comment.user_id),
            post_id: Set(comment.post_id),
            created_at: NotSet,
            seq: NotSet,
        }
    }
}
