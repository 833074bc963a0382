use async_trait::async_trait;

use crate::error::StorageError;

/// File storage trait - abstraction over where uploaded bytes end up.
#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Write `data` as `file_name` inside `dir`, creating the directory if needed.
    async fn store(&self, dir: &str, file_name: &str, data: &[u8]) -> Result<(), StorageError>;
}
