use crate::domain::article::entity::{Article, ArticleSummary, NewArticle};
use crate::domain::article::value_objects::ArticleSlug;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Insert or overwrite the article stored under `article.slug`. An
    /// overwritten article keeps its original creation time.
    async fn save(&self, article: NewArticle) -> DomainResult<Article>;
    /// Fails with `NotFound` when nothing is stored under `slug`.
    async fn delete(&self, slug: &ArticleSlug) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    /// Summaries ordered newest first.
    async fn list(&self) -> DomainResult<Vec<ArticleSummary>>;
}
