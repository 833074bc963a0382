//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, NotSet, QueryFilter};
use uuid::Uuid;

use quill_core::domain::Post;
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, query_error};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn increment_like(&self, id: Uuid, delta: i64) -> Result<Option<Post>, RepoError> {
        tracing::debug!(post_id = %id, delta, "Incrementing like counter");

        // UPDATE posts SET like_count = like_count + $1 WHERE id = $2 RETURNING *
        let updated = PostEntity::update_many()
            .col_expr(
                post::Column::LikeCount,
                Expr::col(post::Column::LikeCount).add(delta),
            )
            .filter(post::Column::Id.eq(id))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| match query_error(e) {
                RepoError::OutOfRange(_) => RepoError::OutOfRange(format!(
                    "like count of post {} cannot change by {}",
                    id, delta
                )),
                other => other,
            })?;

        Ok(updated.into_iter().next().map(Into::into))
    }

    async fn update_content(&self, entity: Post) -> Result<Post, RepoError> {
        let mut active_model: post::ActiveModel = entity.into();
        // The counter is owned by increment_like.
        active_model.like_count = NotSet;

        let model = active_model.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => RepoError::NotFound,
            other => query_error(other),
        })?;

        Ok(model.into())
    }
}
