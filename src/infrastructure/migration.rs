//! Copies published articles from the file backend into the database.

use crate::domain::article::ArticleReadRepository;
use crate::domain::errors::DomainResult;
use crate::infrastructure::repositories::PostgresArticleWriteRepository;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MigrationReport {
    pub migrated: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Insert every article of `source` into `target`, leaving slugs that already
/// exist in the database alone. A failing article is logged and counted; only
/// failure to list the source aborts the run.
pub async fn migrate_articles(
    source: &dyn ArticleReadRepository,
    target: &PostgresArticleWriteRepository,
) -> DomainResult<MigrationReport> {
    let mut report = MigrationReport::default();

    for summary in source.list().await? {
        let slug = summary.slug;
        let article = match source.find_by_slug(&slug).await {
            Ok(Some(article)) => article,
            Ok(None) => {
                tracing::warn!(%slug, "article disappeared during migration");
                report.failed += 1;
                continue;
            }
            Err(err) => {
                tracing::error!(%slug, error = %err, "failed to read article");
                report.failed += 1;
                continue;
            }
        };

        match target.insert_if_absent(&article).await {
            Ok(true) => {
                tracing::info!(%slug, "migrated");
                report.migrated += 1;
            }
            Ok(false) => {
                tracing::info!(%slug, "already present, skipped");
                report.skipped += 1;
            }
            Err(err) => {
                tracing::error!(%slug, error = %err, "failed to migrate article");
                report.failed += 1;
            }
        }
    }

    Ok(report)
}
