// src/application/commands/submissions/approve.rs
use super::SubmissionCommandService;
use crate::{
    application::{
        dto::ApprovalDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{article::NewArticle, submission::SubmissionId},
};

pub struct ApproveSubmissionCommand {
    pub id: i64,
}

impl SubmissionCommandService {
    /// Render a pending submission, publish it as an article and drop the
    /// submission.
    ///
    /// The only write is `publish`, which is atomic in every backend. A render
    /// or publish failure leaves the submission pending and unchanged.
    pub async fn approve(&self, command: ApproveSubmissionCommand) -> ApplicationResult<ApprovalDto> {
        let id = SubmissionId::new(command.id)
            .map_err(|_| ApplicationError::not_found("submission not found"))?;
        let submission = self
            .submissions
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(submission_id = %id, "approval of unknown submission");
                ApplicationError::not_found("submission not found")
            })?;

        let slug = self.slug_service.slug_for(&submission)?;
        let content = self.renderer.render(&submission)?;

        let article = NewArticle {
            slug,
            title: submission.title.into_inner(),
            author: submission.author.into_inner(),
            description: submission.description,
            content,
            category: submission.category,
            created_at: self.clock.now(),
        };

        let published = self.publisher.publish(id, article).await?;
        let url = published.slug.public_path();
        tracing::info!(submission_id = %id, slug = %published.slug, "submission published");

        Ok(ApprovalDto::for_path(published.slug.into_inner(), url))
    }
}
