use super::SubmissionQueryService;
use crate::application::{dto::SubmissionDto, error::ApplicationResult};

pub struct ListPendingQuery;

impl SubmissionQueryService {
    /// Every submission still awaiting a decision, newest first. Approved
    /// submissions disappear from the store once published, so whatever is
    /// left here is pending.
    pub async fn list_pending(&self, _query: ListPendingQuery) -> ApplicationResult<Vec<SubmissionDto>> {
        let submissions = self.repo.list().await?;
        Ok(submissions.into_iter().map(Into::into).collect())
    }
}
