use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DbConn, DbErr, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait, TransactionTrait,
};

use quill_core::error::RepoError;
use quill_core::ports::BaseRepository;

/// Generic PostgreSQL repository implementation.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

pub(crate) fn query_error(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        other => {
            let err_str = other.to_string();
            if err_str.contains("duplicate") || err_str.contains("unique") {
                RepoError::Constraint("Entity already exists".to_string())
            } else if err_str.contains("out of range") {
                RepoError::OutOfRange(err_str)
            } else {
                RepoError::Query(err_str)
            }
        }
    }
}

#[async_trait]
impl<E, T, ID> BaseRepository<T, ID> for PostgresBaseRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync + Send,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = ID>,
    ID: Send + Sync + Into<sea_orm::Value> + Clone + Copy + 'static,
    T: From<E::Model> + Into<E::ActiveModel> + Clone + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError> {
        let result = E::find_by_id(id).one(&self.db).await.map_err(query_error)?;

        Ok(result.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<T>, RepoError> {
        let result = E::find().all(&self.db).await.map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn insert_many(&self, entities: Vec<T>) -> Result<Vec<T>, RepoError> {
        if entities.is_empty() {
            return Ok(entities);
        }

        // One multi-row INSERT: the batch lands whole or not at all.
        let models: Vec<E::ActiveModel> = entities.iter().cloned().map(Into::into).collect();
        E::insert_many(models)
            .exec_without_returning(&self.db)
            .await
            .map_err(query_error)?;

        Ok(entities)
    }

    async fn delete(&self, id: ID) -> Result<T, RepoError> {
        let txn = self.db.begin().await.map_err(query_error)?;

        let existing = E::find_by_id(id)
            .one(&txn)
            .await
            .map_err(query_error)?
            .ok_or(RepoError::NotFound)?;

        let result = E::delete_by_id(id).exec(&txn).await.map_err(query_error)?;
        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        txn.commit().await.map_err(query_error)?;

        Ok(existing.into())
    }

    async fn delete_all(&self) -> Result<u64, RepoError> {
        let result = E::delete_many()
            .exec(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.rows_affected)
    }
}
