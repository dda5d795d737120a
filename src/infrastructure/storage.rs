//! Storage-mode selection.

use crate::config::{AppConfig, StorageMode};
use crate::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::submission::{PublicationRepository, SubmissionRepository};
use crate::infrastructure::database;
use crate::infrastructure::repositories::{
    FileStore, PostgresArticleReadRepository, PostgresArticleWriteRepository,
    PostgresPublicationRepository, PostgresSubmissionRepository, map_sqlx,
};
use sqlx::PgPool;
use std::sync::Arc;

/// The four storage handles the pipeline needs, all backed by one backend.
#[derive(Clone)]
pub struct StorageAdapters {
    pub submissions: Arc<dyn SubmissionRepository>,
    pub publications: Arc<dyn PublicationRepository>,
    pub article_reads: Arc<dyn ArticleReadRepository>,
    pub article_writes: Arc<dyn ArticleWriteRepository>,
}

impl StorageAdapters {
    pub async fn connect(config: &AppConfig) -> DomainResult<Self> {
        match config.storage_mode() {
            StorageMode::Local => {
                let store = FileStore::open(config.data_dir()).await?;
                tracing::info!(data_dir = %config.data_dir().display(), "using file storage");
                Ok(Self::files(Arc::new(store)))
            }
            StorageMode::Database => {
                let url = config
                    .database_url()
                    .ok_or_else(|| DomainError::Storage("DATABASE_URL is not set".into()))?;
                let pool = database::init_pool(url, config.database_max_connections())
                    .await
                    .map_err(map_sqlx)?;
                database::ensure_schema(&pool).await.map_err(map_sqlx)?;
                tracing::info!("using database storage");
                Ok(Self::postgres(pool))
            }
        }
    }

    pub fn files(store: Arc<FileStore>) -> Self {
        Self {
            submissions: store.clone(),
            publications: store.clone(),
            article_reads: store.clone(),
            article_writes: store,
        }
    }

    pub fn postgres(pool: PgPool) -> Self {
        Self {
            submissions: Arc::new(PostgresSubmissionRepository::new(pool.clone())),
            publications: Arc::new(PostgresPublicationRepository::new(pool.clone())),
            article_reads: Arc::new(PostgresArticleReadRepository::new(pool.clone())),
            article_writes: Arc::new(PostgresArticleWriteRepository::new(pool)),
        }
    }
}
