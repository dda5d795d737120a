// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{article::ArticleSlug, errors::DomainError},
};

pub struct DeleteArticleCommand {
    pub slug: String,
}

impl ArticleCommandService {
    /// Permanently remove a published article.
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        // A malformed slug cannot name a stored article.
        let slug = ArticleSlug::new(command.slug)
            .map_err(|_| ApplicationError::not_found("article not found"))?;

        match self.write_repo.delete(&slug).await {
            Ok(()) => {
                tracing::info!(slug = %slug, "article deleted");
                Ok(())
            }
            Err(DomainError::NotFound(_)) => {
                tracing::warn!(slug = %slug, "deletion of unknown article");
                Err(ApplicationError::not_found("article not found"))
            }
            Err(other) => Err(other.into()),
        }
    }
}
