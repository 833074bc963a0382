//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::domain::ImageCategory;
use quill_core::ports::{FileStorage, PostRepository};
use quill_core::{PostService, UploadService};
use quill_infra::database::{DatabaseConnections, InMemoryPostRepository};
use quill_infra::storage::LocalFileStorage;

#[cfg(feature = "postgres")]
use migration::MigratorTrait;
#[cfg(feature = "postgres")]
use quill_infra::database::PostgresPostRepository;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub uploads: UploadService,
    #[cfg_attr(not(feature = "postgres"), allow(dead_code))]
    pub db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> std::io::Result<Self> {
        let storage = LocalFileStorage::new(&config.upload_dir);
        storage
            .ensure_dirs(ImageCategory::ALL.iter().map(|c| c.dir()))
            .await
            .map_err(std::io::Error::other)?;
        tracing::info!(upload_dir = %storage.root().display(), "Upload storage ready");

        #[cfg(feature = "postgres")]
        let (db, repo): (Option<Arc<DatabaseConnections>>, Arc<dyn PostRepository>) = {
            if let Some(db_config) = &config.database {
                match connect_and_migrate(db_config).await {
                    Ok(connections) => {
                        let conn = Arc::new(connections);
                        let repo: Arc<dyn PostRepository> =
                            Arc::new(PostgresPostRepository::new(conn.main.clone()));
                        (Some(conn), repo)
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to prepare database: {}. Using in-memory fallback.",
                            e
                        );
                        (None, Arc::new(InMemoryPostRepository::new()))
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                (None, Arc::new(InMemoryPostRepository::new()))
            }
        };

        #[cfg(not(feature = "postgres"))]
        let (db, repo): (Option<Arc<DatabaseConnections>>, Arc<dyn PostRepository>) = {
            tracing::info!("Running without postgres feature - using in-memory repository");
            (None, Arc::new(InMemoryPostRepository::new()))
        };

        tracing::info!("Application state initialized");

        let mut state = Self::with_parts(repo, Arc::new(storage), &config.public_base_url);
        state.db = db;
        Ok(state)
    }

    /// Assemble state from explicit adapters. No database handle is attached.
    pub fn with_parts(
        repo: Arc<dyn PostRepository>,
        storage: Arc<dyn FileStorage>,
        public_base_url: &str,
    ) -> Self {
        Self {
            posts: PostService::new(repo),
            uploads: UploadService::new(storage, public_base_url),
            db: None,
        }
    }
}

#[cfg(feature = "postgres")]
async fn connect_and_migrate(
    config: &quill_infra::database::DatabaseConfig,
) -> Result<DatabaseConnections, migration::DbErr> {
    let connections = DatabaseConnections::init(config).await?;
    migration::Migrator::up(&connections.main, None).await?;
    tracing::info!("Database migrations applied");
    Ok(connections)
}
