// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::Category;
use crate::domain::article::{
    Article, ArticleReadRepository, ArticleSlug, ArticleSummary, ArticleWriteRepository,
    NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Executor, FromRow, PgPool, Postgres};

const ARTICLE_COLUMNS: &str =
    "slug, title, author, description, content, category, created_at::timestamptz AS created_at";
const SUMMARY_COLUMNS: &str =
    "slug, title, author, description, category, created_at::timestamptz AS created_at";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    slug: String,
    title: String,
    author: Option<String>,
    description: Option<String>,
    content: String,
    category: Option<String>,
    created_at: Option<DateTime<Utc>>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            slug: ArticleSlug::new(row.slug)?,
            title: row.title,
            author: row.author.unwrap_or_default(),
            description: row.description.unwrap_or_default(),
            content: row.content,
            category: Category::from_stored(row.category),
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct ArticleSummaryRow {
    slug: String,
    title: String,
    author: Option<String>,
    description: Option<String>,
    category: Option<String>,
    created_at: Option<DateTime<Utc>>,
}

impl TryFrom<ArticleSummaryRow> for ArticleSummary {
    type Error = DomainError;

    fn try_from(row: ArticleSummaryRow) -> Result<Self, Self::Error> {
        Ok(ArticleSummary {
            slug: ArticleSlug::new(row.slug)?,
            title: row.title,
            author: row.author.unwrap_or_default(),
            description: row.description.unwrap_or_default(),
            category: Category::from_stored(row.category),
            created_at: row.created_at,
        })
    }
}

fn decode(row: ArticleRow) -> DomainResult<Article> {
    let slug = row.slug.clone();
    Article::try_from(row)
        .map_err(|err| DomainError::Storage(format!("unreadable article row {slug}: {err}")))
}

/// Rows whose slug no longer validates are skipped with a warning.
fn readable_summary(row: ArticleSummaryRow) -> Option<ArticleSummary> {
    let slug = row.slug.clone();
    match ArticleSummary::try_from(row) {
        Ok(summary) => Some(summary),
        Err(err) => {
            tracing::warn!(slug = %slug, error = %err, "skipping unreadable article row");
            None
        }
    }
}

/// Insert or overwrite an article on any executor, so the publication
/// transaction can share the statement.
pub(super) async fn upsert_article<'e, E>(executor: E, article: NewArticle) -> DomainResult<Article>
where
    E: Executor<'e, Database = Postgres>,
{
    let NewArticle {
        slug,
        title,
        author,
        description,
        content,
        category,
        created_at,
    } = article;

    let row = sqlx::query_as::<_, ArticleRow>(&format!(
        "INSERT INTO articles (slug, title, author, description, content, category, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         ON CONFLICT (slug) DO UPDATE SET
             title = EXCLUDED.title,
             author = EXCLUDED.author,
             description = EXCLUDED.description,
             content = EXCLUDED.content,
             category = EXCLUDED.category
         RETURNING {ARTICLE_COLUMNS}"
    ))
    .bind(slug.into_inner())
    .bind(title)
    .bind(author)
    .bind(description)
    .bind(content)
    .bind(category.into_inner())
    .bind(created_at)
    .fetch_one(executor)
    .await
    .map_err(map_sqlx)?;

    decode(row)
}

impl PostgresArticleWriteRepository {
    /// Insert `article` unless its slug is already taken. Returns whether a
    /// row was written. Existing rows are left untouched.
    pub async fn insert_if_absent(&self, article: &Article) -> DomainResult<bool> {
        let result = sqlx::query(
            "INSERT INTO articles (slug, title, author, description, content, category, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, now()))
             ON CONFLICT (slug) DO NOTHING",
        )
        .bind(article.slug.as_str())
        .bind(&article.title)
        .bind(&article.author)
        .bind(&article.description)
        .bind(&article.content)
        .bind(article.category.as_str())
        .bind(article.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn save(&self, article: NewArticle) -> DomainResult<Article> {
        upsert_article(&self.pool, article).await
    }

    async fn delete(&self, slug: &ArticleSlug) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE slug = $1")
            .bind(slug.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(decode).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<ArticleSummary>> {
        let rows = sqlx::query_as::<_, ArticleSummaryRow>(&format!(
            "SELECT {SUMMARY_COLUMNS}
             FROM articles
             ORDER BY created_at DESC NULLS LAST, slug DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows.into_iter().filter_map(readable_summary).collect())
    }
}
