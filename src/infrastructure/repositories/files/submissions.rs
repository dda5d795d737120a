use super::{FileStore, SubmissionRecord, read_optional, write_atomic};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::submission::{NewSubmission, Submission, SubmissionId, SubmissionRepository};
use async_trait::async_trait;

impl FileStore {
    pub(super) async fn load_submissions(&self) -> DomainResult<Vec<SubmissionRecord>> {
        self.load_json(&self.submissions_path()).await
    }

    pub(super) async fn store_submissions(&self, records: &[SubmissionRecord]) -> DomainResult<()> {
        self.store_json(&self.submissions_path(), records).await
    }

    /// Highest id ever issued, from the sequence file or the records
    /// themselves, whichever is larger.
    async fn last_issued_id(&self, records: &[SubmissionRecord]) -> DomainResult<i64> {
        let from_file = match read_optional(&self.sequence_path()).await? {
            Some(bytes) => String::from_utf8_lossy(&bytes)
                .trim()
                .parse::<i64>()
                .map_err(|err| DomainError::Storage(format!("malformed sequence file: {err}")))?,
            None => 0,
        };
        let from_records = records.iter().map(|r| r.id).max().unwrap_or(0);
        Ok(from_file.max(from_records))
    }
}

fn to_submission(record: SubmissionRecord) -> Option<Submission> {
    let id = record.id;
    match Submission::try_from(record) {
        Ok(submission) => Some(submission),
        Err(err) => {
            tracing::warn!(submission_id = id, error = %err, "skipping unreadable submission record");
            None
        }
    }
}

#[async_trait]
impl SubmissionRepository for FileStore {
    async fn list(&self) -> DomainResult<Vec<Submission>> {
        let mut submissions: Vec<Submission> = self
            .load_submissions()
            .await?
            .into_iter()
            .filter_map(to_submission)
            .collect();
        submissions.sort_by(|a, b| i64::from(b.id).cmp(&i64::from(a.id)));
        Ok(submissions)
    }

    async fn find_by_id(&self, id: SubmissionId) -> DomainResult<Option<Submission>> {
        let wanted = i64::from(id);
        Ok(self
            .load_submissions()
            .await?
            .into_iter()
            .find(|r| r.id == wanted)
            .and_then(to_submission))
    }

    async fn insert(&self, submission: NewSubmission) -> DomainResult<Submission> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load_submissions().await?;
        let next = self.last_issued_id(&records).await? + 1;
        let stored = submission.into_submission(SubmissionId::new(next)?);

        // The sequence is bumped first; a failure after this point burns the
        // id instead of handing it out twice.
        write_atomic(&self.sequence_path(), next.to_string().as_bytes()).await?;
        records.push(SubmissionRecord::from(&stored));
        self.store_submissions(&records).await?;

        tracing::debug!(submission_id = next, "submission stored");
        Ok(stored)
    }

    async fn set_approved(
        &self,
        id: SubmissionId,
        approved: bool,
    ) -> DomainResult<Option<Submission>> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load_submissions().await?;
        let wanted = i64::from(id);
        let Some(record) = records.iter_mut().find(|r| r.id == wanted) else {
            return Ok(None);
        };
        record.approved = approved;
        let updated = record.clone();
        self.store_submissions(&records).await?;
        Ok(to_submission(updated))
    }

    async fn delete(&self, id: SubmissionId) -> DomainResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load_submissions().await?;
        let wanted = i64::from(id);
        let Some(index) = records.iter().position(|r| r.id == wanted) else {
            return Err(DomainError::NotFound(format!("submission {id}")));
        };
        records.remove(index);
        self.store_submissions(&records).await
    }
}
