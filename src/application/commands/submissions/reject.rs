// src/application/commands/submissions/reject.rs
use super::SubmissionCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{errors::DomainError, submission::SubmissionId},
};

pub struct RejectSubmissionCommand {
    pub id: i64,
}

impl SubmissionCommandService {
    pub async fn reject(&self, command: RejectSubmissionCommand) -> ApplicationResult<()> {
        let id = SubmissionId::new(command.id)
            .map_err(|_| ApplicationError::not_found("submission not found"))?;

        match self.submissions.delete(id).await {
            Ok(()) => {
                tracing::info!(submission_id = %id, "submission rejected");
                Ok(())
            }
            Err(DomainError::NotFound(_)) => {
                tracing::warn!(submission_id = %id, "rejection of unknown submission");
                Err(ApplicationError::not_found("submission not found"))
            }
            Err(other) => Err(other.into()),
        }
    }
}
