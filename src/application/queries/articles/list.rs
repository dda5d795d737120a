use super::ArticleQueryService;
use crate::application::{dto::ArticleSummaryDto, error::ApplicationResult};

pub struct ListArticlesQuery;

impl ArticleQueryService {
    /// Published articles, newest first.
    pub async fn list_articles(
        &self,
        _query: ListArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleSummaryDto>> {
        let summaries = self.read_repo.list().await?;
        Ok(summaries.into_iter().map(Into::into).collect())
    }
}
