use std::marker::PhantomData;
use std::sync::Arc;

use sea_orm::{DbConn, EntityTrait, PrimaryKeyTrait};

use remark_core::error::RepoError;

/// Generic PostgreSQL repository over a single SeaORM entity.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: Arc<DbConn>,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: Arc<DbConn>) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    /// Load one row by primary key and map it into a domain type.
    pub(crate) async fn fetch_by_id<T>(
        &self,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> Result<Option<T>, RepoError>
    where
        T: From<E::Model>,
    {
        let result = E::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }
}

/// Map a SeaORM write error, picking out constraint violations.
pub(crate) fn write_error(err: sea_orm::DbErr) -> RepoError {
    let err_str = err.to_string();
    if err_str.contains("duplicate") || err_str.contains("unique") {
        RepoError::Constraint("Entity already exists".to_string())
    } else {
        RepoError::Query(err_str)
    }
}
