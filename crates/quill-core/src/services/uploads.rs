//! Image uploads - naming, storing and building public URLs.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::{ImageCategory, IncomingFile, StoredUpload, stored_file_name};
use crate::error::DomainError;
use crate::ports::FileStorage;

#[derive(Clone)]
pub struct UploadService {
    storage: Arc<dyn FileStorage>,
    base_url: String,
}

impl UploadService {
    /// `base_url` is the public address uploads are served from, e.g.
    /// `https://blog.example.com`.
    pub fn new(storage: Arc<dyn FileStorage>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { storage, base_url }
    }

    /// Store a single file. Any content is accepted as-is.
    pub async fn upload(
        &self,
        category: ImageCategory,
        file: Option<IncomingFile>,
    ) -> Result<StoredUpload, DomainError> {
        let file = file.ok_or_else(|| DomainError::Validation("No file uploaded".to_string()))?;

        let file_name = stored_file_name(
            file.original_name.as_deref(),
            Utc::now().timestamp_millis(),
            rand::random::<u32>(),
        );

        self.storage
            .store(category.dir(), &file_name, &file.data)
            .await?;

        tracing::info!(
            category = category.dir(),
            file_name = %file_name,
            size = file.data.len(),
            "Image stored"
        );

        Ok(StoredUpload {
            url: self.public_url(category, &file_name),
            file_name,
        })
    }

    pub fn public_url(&self, category: ImageCategory, file_name: &str) -> String {
        format!("{}/uploads/{}/{}", self.base_url, category.dir(), file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingStorage {
        writes: Mutex<Vec<(String, String, Vec<u8>)>>,
    }

    #[async_trait]
    impl FileStorage for RecordingStorage {
        async fn store(&self, dir: &str, file_name: &str, data: &[u8]) -> Result<(), StorageError> {
            self.writes
                .lock()
                .unwrap()
                .push((dir.to_string(), file_name.to_string(), data.to_vec()));
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_missing_file_is_validation_error() {
        let storage = Arc::new(RecordingStorage::default());
        let service = UploadService::new(storage.clone(), "http://localhost:8080");

        let err = service.upload(ImageCategory::Post, None).await.unwrap_err();

        assert!(matches!(err, DomainError::Validation(ref msg) if msg == "No file uploaded"));
        assert!(storage.writes.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upload_writes_into_category_dir() {
        let storage = Arc::new(RecordingStorage::default());
        let service = UploadService::new(storage.clone(), "https://blog.example.com/");

        let stored = service
            .upload(
                ImageCategory::User,
                Some(IncomingFile {
                    original_name: Some("avatar.png".to_string()),
                    data: b"png-bytes".to_vec(),
                }),
            )
            .await
            .unwrap();

        assert!(stored.file_name.ends_with(".png"));
        assert_eq!(
            stored.url,
            format!("https://blog.example.com/uploads/users/{}", stored.file_name)
        );

        let writes = storage.writes.lock().unwrap();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].0, "users");
        assert_eq!(writes[0].1, stored.file_name);
        assert_eq!(writes[0].2, b"png-bytes");
    }
}
