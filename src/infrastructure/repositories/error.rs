use crate::domain::errors::DomainError;

const CNT_ARTICLE_SLUG: &str = "articles_slug_key";

/// Map a sqlx failure to a storage error, logging it where it is mapped.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    let message = match &err {
        sqlx::Error::Database(db_err) => match db_err.constraint() {
            Some(CNT_ARTICLE_SLUG) => "article slug already exists".to_string(),
            Some(other) => format!("database constraint violation: {other}"),
            None => db_err.message().to_string(),
        },
        sqlx::Error::PoolTimedOut => "database connection pool timed out".to_string(),
        _ => err.to_string(),
    };
    tracing::error!(error = %err, "database operation failed");
    DomainError::Storage(message)
}
