// tests/support/mocks/repos.rs
use async_trait::async_trait;
use newsroom_core::domain::article::{Article, NewArticle};
use newsroom_core::domain::errors::{DomainError, DomainResult};
use newsroom_core::domain::submission::{
    NewSubmission, PublicationRepository, Submission, SubmissionId, SubmissionRepository,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// 最初の `failures` 回だけストレージエラーを返し、その後は本物の公開処理に委譲する
pub struct FailingPublisher {
    inner: Arc<dyn PublicationRepository>,
    failures_left: AtomicUsize,
}

impl FailingPublisher {
    pub fn new(inner: Arc<dyn PublicationRepository>, failures: usize) -> Self {
        Self {
            inner,
            failures_left: AtomicUsize::new(failures),
        }
    }
}

#[async_trait]
impl PublicationRepository for FailingPublisher {
    async fn publish(&self, id: SubmissionId, article: NewArticle) -> DomainResult<Article> {
        let failing = self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failing {
            return Err(DomainError::Storage("disk full".into()));
        }
        self.inner.publish(id, article).await
    }
}

/// すべての操作がストレージエラーになる投稿ストア
pub struct FailingSubmissionStore;

fn unavailable<T>() -> DomainResult<T> {
    Err(DomainError::Storage("submission store unavailable".into()))
}

#[async_trait]
impl SubmissionRepository for FailingSubmissionStore {
    async fn list(&self) -> DomainResult<Vec<Submission>> {
        unavailable()
    }

    async fn find_by_id(&self, _id: SubmissionId) -> DomainResult<Option<Submission>> {
        unavailable()
    }

    async fn insert(&self, _submission: NewSubmission) -> DomainResult<Submission> {
        unavailable()
    }

    async fn set_approved(
        &self,
        _id: SubmissionId,
        _approved: bool,
    ) -> DomainResult<Option<Submission>> {
        unavailable()
    }

    async fn delete(&self, _id: SubmissionId) -> DomainResult<()> {
        unavailable()
    }
}
