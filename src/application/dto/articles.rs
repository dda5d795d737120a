use crate::domain::article::{Article, ArticleSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleSummaryDto {
    pub slug: String,
    pub title: String,
    pub author: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Public path of the rendered page, e.g. `/news/network-upgrade`.
    pub url: String,
}

impl From<ArticleSummary> for ArticleSummaryDto {
    fn from(summary: ArticleSummary) -> Self {
        Self {
            url: summary.slug.public_path(),
            slug: summary.slug.into_inner(),
            title: summary.title,
            author: summary.author,
            description: summary.description,
            category: summary.category.into_inner(),
            created_at: summary.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub slug: String,
    pub title: String,
    pub author: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    pub url: String,
    /// Rendered HTML document.
    pub content: String,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            url: article.slug.public_path(),
            slug: article.slug.into_inner(),
            title: article.title,
            author: article.author,
            description: article.description,
            category: article.category.into_inner(),
            created_at: article.created_at,
            content: article.content,
        }
    }
}
