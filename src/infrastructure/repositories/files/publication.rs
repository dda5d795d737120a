use super::FileStore;
use crate::domain::article::{Article, NewArticle};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::submission::{PublicationRepository, SubmissionId};
use async_trait::async_trait;

#[async_trait]
impl PublicationRepository for FileStore {
    async fn publish(
        &self,
        submission_id: SubmissionId,
        article: NewArticle,
    ) -> DomainResult<Article> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.load_submissions().await?;
        let wanted = i64::from(submission_id);
        let Some(index) = records.iter().position(|r| r.id == wanted) else {
            return Err(DomainError::NotFound(format!("submission {submission_id}")));
        };

        let snapshot = self.snapshot_article(&article.slug).await?;
        let stored = match self.write_article(article).await {
            Ok(stored) => stored,
            Err(err) => {
                self.rollback(snapshot).await;
                return Err(err);
            }
        };

        records.remove(index);
        if let Err(err) = self.store_submissions(&records).await {
            tracing::error!(submission_id = wanted, error = %err, "publish failed removing submission");
            self.rollback(snapshot).await;
            return Err(err);
        }

        Ok(stored)
    }
}

impl FileStore {
    async fn rollback(&self, snapshot: super::articles::ArticleSnapshot) {
        if let Err(err) = self.restore_article(snapshot).await {
            tracing::error!(error = %err, "failed to roll back article write");
        }
    }
}
