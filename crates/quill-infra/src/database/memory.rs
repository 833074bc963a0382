//! In-memory post repository - used when no database is configured and in tests.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::Post;
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, PostRepository};

/// Post collection held in a `Vec` behind an async RwLock.
///
/// Insertion order is preserved, matching the store default order of a
/// freshly created table. Every operation takes the lock once, so each call
/// is atomic with respect to the others.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn insert_many(&self, entities: Vec<Post>) -> Result<Vec<Post>, RepoError> {
        let mut posts = self.posts.write().await;

        // Validate the whole batch before touching the collection.
        for (i, post) in entities.iter().enumerate() {
            let clashes_stored = posts.iter().any(|p| p.id == post.id);
            let clashes_batch = entities[..i].iter().any(|p| p.id == post.id);
            if clashes_stored || clashes_batch {
                return Err(RepoError::Constraint(format!(
                    "duplicate post id {}",
                    post.id
                )));
            }
        }

        posts.extend(entities.iter().cloned());
        Ok(entities)
    }

    async fn delete(&self, id: Uuid) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        let index = posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;
        Ok(posts.remove(index))
    }

    async fn delete_all(&self) -> Result<u64, RepoError> {
        let mut posts = self.posts.write().await;
        let removed = posts.len() as u64;
        posts.clear();
        Ok(removed)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn increment_like(&self, id: Uuid, delta: i64) -> Result<Option<Post>, RepoError> {
        let mut posts = self.posts.write().await;
        let Some(post) = posts.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        post.like.count = post.like.count.checked_add(delta).ok_or_else(|| {
            RepoError::OutOfRange(format!("like count of post {} cannot change by {}", id, delta))
        })?;
        Ok(Some(post.clone()))
    }

    async fn update_content(&self, mut entity: Post) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        let slot = posts
            .iter_mut()
            .find(|p| p.id == entity.id)
            .ok_or(RepoError::NotFound)?;
        entity.like.count = slot.like.count;
        *slot = entity.clone();
        Ok(entity)
    }
}
