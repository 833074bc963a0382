use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Post;
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Every entity, in store order.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Insert a batch. Either every entity is stored or none is.
    async fn insert_many(&self, entities: Vec<T>) -> Result<Vec<T>, RepoError>;

    /// Delete an entity by its ID and return it.
    async fn delete(&self, id: ID) -> Result<T, RepoError>;

    /// Delete every entity, returning how many were removed.
    async fn delete_all(&self) -> Result<u64, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// Atomically add `delta` to `like.count`. `None` if the post does not exist,
    /// `RepoError::OutOfRange` if the counter would leave the `i64` range.
    async fn increment_like(&self, id: Uuid, delta: i64) -> Result<Option<Post>, RepoError>;

    /// Overwrite every field except `like.count`, which keeps its stored value.
    /// `RepoError::NotFound` if the post does not exist.
    async fn update_content(&self, post: Post) -> Result<Post, RepoError>;
}
