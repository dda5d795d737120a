// src/application/commands/submissions/submit.rs
use super::SubmissionCommandService;
use crate::{
    application::{dto::SubmissionDto, error::ApplicationResult},
    domain::{
        Category,
        submission::{AuthorHandle, NewSubmission, SubmissionContent, SubmissionTitle},
    },
};

pub struct SubmitCommand {
    pub title: String,
    pub author: String,
    pub content: String,
    pub description: Option<String>,
    pub category: Option<String>,
}

impl SubmissionCommandService {
    /// Store a new pending submission. All fields are validated before
    /// anything is written.
    pub async fn submit(&self, command: SubmitCommand) -> ApplicationResult<SubmissionDto> {
        let title = SubmissionTitle::new(command.title)?;
        let author = AuthorHandle::new(command.author)?;
        let content = SubmissionContent::new(command.content)?;
        let category = Category::parse_or_default(command.category)?;
        let description = command
            .description
            .map(|d| d.trim().to_string())
            .unwrap_or_default();

        let created = self
            .submissions
            .insert(NewSubmission {
                title,
                author,
                content,
                description,
                category,
                created_at: self.clock.now(),
            })
            .await?;

        tracing::info!(submission_id = %created.id, "submission received");
        Ok(created.into())
    }
}
