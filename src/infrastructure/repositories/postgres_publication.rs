// src/infrastructure/repositories/postgres_publication.rs
use super::{map_sqlx, postgres_article::upsert_article};
use crate::domain::article::{Article, NewArticle};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::submission::{PublicationRepository, SubmissionId};
use async_trait::async_trait;
use sqlx::PgPool;

/// Publishes approved submissions inside a single transaction.
///
/// The submission row is deleted first so its row lock serializes concurrent
/// approvals of the same id: the second transaction waits, then deletes
/// nothing and rolls back with `NotFound`.
#[derive(Clone)]
pub struct PostgresPublicationRepository {
    pool: PgPool,
}

impl PostgresPublicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PublicationRepository for PostgresPublicationRepository {
    async fn publish(
        &self,
        submission_id: SubmissionId,
        article: NewArticle,
    ) -> DomainResult<Article> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let deleted = sqlx::query("DELETE FROM submissions WHERE id = $1")
            .bind(i64::from(submission_id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        if deleted.rows_affected() == 0 {
            tx.rollback().await.map_err(map_sqlx)?;
            return Err(DomainError::NotFound("submission not found".into()));
        }

        let published = upsert_article(&mut *tx, article).await?;
        tx.commit().await.map_err(map_sqlx)?;

        Ok(published)
    }
}
