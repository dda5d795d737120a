// src/infrastructure/repositories/postgres_submission.rs
use super::map_sqlx;
use crate::domain::Category;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::submission::{
    AuthorHandle, NewSubmission, Submission, SubmissionContent, SubmissionId,
    SubmissionRepository, SubmissionTitle,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

// Casts let tables created with `SERIAL` ids and zone-less `TIMESTAMP` columns
// decode the same as the current schema.
const SUBMISSION_COLUMNS: &str = "id::int8 AS id, title, x_username, content, description, \
     category, approved, created_at::timestamptz AS created_at";

#[derive(Clone)]
pub struct PostgresSubmissionRepository {
    pool: PgPool,
}

impl PostgresSubmissionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
pub(super) struct SubmissionRow {
    id: i64,
    title: String,
    x_username: String,
    content: String,
    description: Option<String>,
    category: Option<String>,
    approved: Option<bool>,
    created_at: Option<DateTime<Utc>>,
}

impl TryFrom<SubmissionRow> for Submission {
    type Error = DomainError;

    fn try_from(row: SubmissionRow) -> Result<Self, Self::Error> {
        Ok(Submission {
            id: SubmissionId::new(row.id)?,
            title: SubmissionTitle::new(row.title)?,
            author: AuthorHandle::new(row.x_username)?,
            content: SubmissionContent::new(row.content)?,
            description: row.description.unwrap_or_default(),
            category: Category::from_stored(row.category),
            approved: row.approved.unwrap_or(false),
            created_at: row.created_at,
        })
    }
}

/// Decode a row the caller expects to be valid. A row that does not form a
/// submission is a storage fault, not bad client input.
fn decode(row: SubmissionRow) -> DomainResult<Submission> {
    let id = row.id;
    Submission::try_from(row)
        .map_err(|err| DomainError::Storage(format!("unreadable submission row {id}: {err}")))
}

/// Rows that no longer validate (for example a blank legacy title) are
/// skipped with a warning so one bad row cannot hide the rest.
fn readable(row: SubmissionRow) -> Option<Submission> {
    let id = row.id;
    match Submission::try_from(row) {
        Ok(submission) => Some(submission),
        Err(err) => {
            tracing::warn!(submission_id = id, error = %err, "skipping unreadable submission row");
            None
        }
    }
}

#[async_trait]
impl SubmissionRepository for PostgresSubmissionRepository {
    async fn list(&self) -> DomainResult<Vec<Submission>> {
        let rows = sqlx::query_as::<_, SubmissionRow>(&format!(
            "SELECT {SUBMISSION_COLUMNS} FROM submissions ORDER BY id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows.into_iter().filter_map(readable).collect())
    }

    async fn find_by_id(&self, id: SubmissionId) -> DomainResult<Option<Submission>> {
        let row = sqlx::query_as::<_, SubmissionRow>(&format!(
            "SELECT {SUBMISSION_COLUMNS} FROM submissions WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.and_then(readable))
    }

    async fn insert(&self, submission: NewSubmission) -> DomainResult<Submission> {
        let NewSubmission {
            title,
            author,
            content,
            description,
            category,
            created_at,
        } = submission;

        let row = sqlx::query_as::<_, SubmissionRow>(&format!(
            "INSERT INTO submissions (title, x_username, content, description, category, approved, created_at)
             VALUES ($1, $2, $3, $4, $5, FALSE, $6)
             RETURNING {SUBMISSION_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(author.as_str())
        .bind(content.as_str())
        .bind(description)
        .bind(category.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        decode(row)
    }

    async fn set_approved(
        &self,
        id: SubmissionId,
        approved: bool,
    ) -> DomainResult<Option<Submission>> {
        let row = sqlx::query_as::<_, SubmissionRow>(&format!(
            "UPDATE submissions SET approved = $1 WHERE id = $2 RETURNING {SUBMISSION_COLUMNS}"
        ))
        .bind(approved)
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(decode).transpose()
    }

    async fn delete(&self, id: SubmissionId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM submissions WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("submission not found".into()));
        }
        Ok(())
    }
}
