use crate::domain::article::{Article, NewArticle};
use crate::domain::errors::DomainResult;
use crate::domain::submission::entity::{NewSubmission, Submission};
use crate::domain::submission::value_objects::SubmissionId;
use async_trait::async_trait;

#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// All stored submissions, highest id first.
    async fn list(&self) -> DomainResult<Vec<Submission>>;
    async fn find_by_id(&self, id: SubmissionId) -> DomainResult<Option<Submission>>;
    async fn insert(&self, submission: NewSubmission) -> DomainResult<Submission>;
    async fn set_approved(
        &self,
        id: SubmissionId,
        approved: bool,
    ) -> DomainResult<Option<Submission>>;
    /// Fails with `NotFound` when no submission has this id.
    async fn delete(&self, id: SubmissionId) -> DomainResult<()>;
}

#[async_trait]
pub trait PublicationRepository: Send + Sync {
    /// Persist `article` and remove the submission as one unit.
    ///
    /// Fails with `NotFound` (and writes nothing) when the submission is gone,
    /// which is what a second concurrent approval of the same id observes.
    async fn publish(&self, submission_id: SubmissionId, article: NewArticle)
    -> DomainResult<Article>;
}
