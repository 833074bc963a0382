//! Post management - the CRUD surface over the post collection.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{Post, PostDraft, PostUpdate};
use crate::error::{DomainError, RepoError};
use crate::ports::PostRepository;

/// The only like deltas a single request may apply.
pub const ALLOWED_LIKE_DELTAS: [i64; 2] = [1, -1];

/// Post service. Owns default handling and error mapping; persistence is
/// delegated to the injected repository.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// Normalize and persist one or more drafts as a single batch.
    pub async fn create(&self, drafts: Vec<PostDraft>) -> Result<Vec<Post>, DomainError> {
        if drafts.is_empty() {
            return Err(DomainError::Validation(
                "At least one post is required".to_string(),
            ));
        }

        let now = Utc::now();
        let posts: Vec<Post> = drafts
            .into_iter()
            .map(|draft| draft.normalize(Uuid::new_v4(), now))
            .collect();

        let created = self.repo.insert_many(posts).await?;
        tracing::info!(count = created.len(), "Posts created");

        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<Post>, DomainError> {
        let posts = self.repo.find_all().await?;
        tracing::debug!(count = posts.len(), "Listed posts");
        Ok(posts)
    }

    pub async fn get(&self, raw_id: &str) -> Result<Post, DomainError> {
        let id = lookup_id(raw_id)?;
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(raw_id))
    }

    /// Overwrite the mutable fields of an existing post. `like.count` is
    /// never written here, so concurrent increments survive.
    pub async fn replace(&self, raw_id: &str, update: PostUpdate) -> Result<Post, DomainError> {
        let id = parse_id(raw_id)?;
        let mut post = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(raw_id))?;
        update.apply_to(&mut post);

        let updated = self
            .repo
            .update_content(post)
            .await
            .map_err(|e| not_found_or(e, raw_id))?;
        tracing::info!(post_id = %updated.id, "Post updated");

        Ok(updated)
    }

    /// Apply a +1/-1 change to the like counter. The count has no floor.
    pub async fn increment_like(&self, raw_id: &str, delta: i64) -> Result<Post, DomainError> {
        if !ALLOWED_LIKE_DELTAS.contains(&delta) {
            return Err(DomainError::Validation(format!(
                "inc must be 1 or -1, got {}",
                delta
            )));
        }
        let id = parse_id(raw_id)?;

        let post = self
            .repo
            .increment_like(id, delta)
            .await?
            .ok_or_else(|| DomainError::post_not_found(raw_id))?;
        tracing::info!(post_id = %post.id, delta, count = post.like.count, "Like counter changed");

        Ok(post)
    }

    pub async fn delete(&self, raw_id: &str) -> Result<Post, DomainError> {
        let id = parse_id(raw_id)?;
        let post = self
            .repo
            .delete(id)
            .await
            .map_err(|e| not_found_or(e, raw_id))?;
        tracing::info!(post_id = %post.id, "Post deleted");
        Ok(post)
    }

    /// Remove every post. No confirmation, no soft delete.
    pub async fn delete_all(&self) -> Result<u64, DomainError> {
        let removed = self.repo.delete_all().await?;
        tracing::warn!(removed, "All posts deleted");
        Ok(removed)
    }
}

/// Lookups treat an unparseable id as one that cannot exist.
fn lookup_id(raw: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw).map_err(|_| DomainError::post_not_found(raw))
}

/// Mutations reject an unparseable id as invalid input.
fn parse_id(raw: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw)
        .map_err(|_| DomainError::Validation(format!("Invalid post id: {}", raw)))
}

fn not_found_or(err: RepoError, raw_id: &str) -> DomainError {
    match err {
        RepoError::NotFound => DomainError::post_not_found(raw_id),
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::BaseRepository;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Repository whose every call fails, counting how often it was reached.
    #[derive(Default)]
    struct UnreachableStore {
        calls: AtomicUsize,
    }

    impl UnreachableStore {
        fn fail<T>(&self) -> Result<T, RepoError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(RepoError::Connection("connection refused".to_string()))
        }
    }

    #[async_trait]
    impl BaseRepository<Post, Uuid> for UnreachableStore {
        async fn find_by_id(&self, _id: Uuid) -> Result<Option<Post>, RepoError> {
            self.fail()
        }
        async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
            self.fail()
        }
        async fn insert_many(&self, _posts: Vec<Post>) -> Result<Vec<Post>, RepoError> {
            self.fail()
        }
        async fn delete(&self, _id: Uuid) -> Result<Post, RepoError> {
            self.fail()
        }
        async fn delete_all(&self) -> Result<u64, RepoError> {
            self.fail()
        }
    }

    #[async_trait]
    impl PostRepository for UnreachableStore {
        async fn increment_like(&self, _id: Uuid, _delta: i64) -> Result<Option<Post>, RepoError> {
            self.fail()
        }
        async fn update_content(&self, _post: Post) -> Result<Post, RepoError> {
            self.fail()
        }
    }

    fn service() -> (PostService, Arc<UnreachableStore>) {
        let store = Arc::new(UnreachableStore::default());
        (PostService::new(store.clone()), store)
    }

    #[tokio::test]
    async fn test_invalid_delta_rejected_before_store() {
        let (service, store) = service();
        let id = Uuid::new_v4().to_string();

        for delta in [0, 2, -2, 100] {
            let err = service.increment_like(&id, delta).await.unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
        }
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_malformed_id_lookup_is_not_found() {
        let (service, store) = service();

        let err = service.get("not-a-uuid").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));

        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_malformed_id_mutation_is_validation() {
        let (service, store) = service();

        let err = service.delete("123").await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let err = service.increment_like("123", 1).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let err = service
            .replace("123", PostUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_out_of_range_maps_to_validation() {
        let err: DomainError = RepoError::OutOfRange("like count".to_string()).into();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_store_failure_is_internal() {
        let (service, _) = service();

        let err = service
            .create(vec![PostDraft::default()])
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Internal(_)));

        let err = service.list().await.unwrap_err();
        assert!(matches!(err, DomainError::Internal(_)));
    }

    #[tokio::test]
    async fn test_empty_batch_rejected() {
        let (service, store) = service();
        let err = service.create(Vec::new()).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    }
}
