use std::sync::Arc;

use crate::domain::submission::SubmissionRepository;

pub struct SubmissionQueryService {
    pub(super) repo: Arc<dyn SubmissionRepository>,
}

impl SubmissionQueryService {
    pub fn new(repo: Arc<dyn SubmissionRepository>) -> Self {
        Self { repo }
    }
}
