// src/bin/migrate_articles.rs
//! Copy articles published by the file backend into PostgreSQL.
use anyhow::{Context, Result};
use newsroom_core::config::AppConfig;
use newsroom_core::infrastructure::{
    database, migration::migrate_articles, repositories::FileStore,
    repositories::PostgresArticleWriteRepository,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,sqlx=warn")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let database_url = config
        .database_url()
        .context("DATABASE_URL must be set to migrate articles")?;

    let source = FileStore::open(config.data_dir()).await?;
    let pool = database::init_pool(database_url, config.database_max_connections()).await?;
    database::ensure_schema(&pool).await?;
    let target = PostgresArticleWriteRepository::new(pool);

    let report = migrate_articles(&source, &target).await?;
    tracing::info!(
        migrated = report.migrated,
        skipped = report.skipped,
        failed = report.failed,
        "article migration finished"
    );
    println!(
        "migrated: {}, skipped: {}, failed: {}",
        report.migrated, report.skipped, report.failed
    );
    Ok(())
}
