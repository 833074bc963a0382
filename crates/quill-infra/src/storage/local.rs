//! Local filesystem storage - uploads land under a single root directory.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;

use quill_core::error::StorageError;
use quill_core::ports::FileStorage;

/// Stores files as `<root>/<dir>/<file_name>`.
///
/// ```rust,ignore
/// let storage = LocalFileStorage::new("./uploads");
/// storage.store("posts", "1714566600000-42.png", &bytes).await?;
/// ```
#[derive(Debug, Clone)]
pub struct LocalFileStorage {
    root: PathBuf,
}

impl LocalFileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the given subdirectories up front so static serving works
    /// before the first upload.
    pub async fn ensure_dirs<'a>(
        &self,
        dirs: impl IntoIterator<Item = &'a str>,
    ) -> Result<(), StorageError> {
        for dir in dirs {
            tokio::fs::create_dir_all(self.root.join(single_component(dir)?)).await?;
        }
        Ok(())
    }
}

/// Reject anything that is not one plain path component.
fn single_component(name: &str) -> Result<&Path, StorageError> {
    let path = Path::new(name);
    let mut components = path.components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(path),
        _ => Err(StorageError::InvalidPath(name.to_string())),
    }
}

#[async_trait]
impl FileStorage for LocalFileStorage {
    async fn store(&self, dir: &str, file_name: &str, data: &[u8]) -> Result<(), StorageError> {
        let dir_path = self.root.join(single_component(dir)?);
        tokio::fs::create_dir_all(&dir_path).await?;

        let file_path = dir_path.join(single_component(file_name)?);
        tokio::fs::write(&file_path, data).await?;

        tracing::debug!(path = %file_path.display(), bytes = data.len(), "File written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_creates_category_dir() {
        let root = tempfile::tempdir().unwrap();
        let storage = LocalFileStorage::new(root.path());

        storage.store("posts", "1-2.png", b"bytes").await.unwrap();

        let written = std::fs::read(root.path().join("posts").join("1-2.png")).unwrap();
        assert_eq!(written, b"bytes");
    }

    #[tokio::test]
    async fn test_store_rejects_traversal() {
        let root = tempfile::tempdir().unwrap();
        let storage = LocalFileStorage::new(root.path());

        let err = storage.store("..", "x.png", b"").await.unwrap_err();
        assert!(matches!(err, StorageError::InvalidPath(_)));

        let err = storage.store("posts", "../x.png", b"").await.unwrap_err();
        assert!(matches!(err, StorageError::InvalidPath(_)));
    }

    #[tokio::test]
    async fn test_ensure_dirs() {
        let root = tempfile::tempdir().unwrap();
        let storage = LocalFileStorage::new(root.path().join("uploads"));

        storage.ensure_dirs(["users", "posts"]).await.unwrap();

        assert!(storage.root().join("users").is_dir());
        assert!(storage.root().join("posts").is_dir());
    }
}
