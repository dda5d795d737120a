use crate::domain::submission::Submission;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmissionDto {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub content: String,
    pub description: String,
    pub category: String,
    pub approved: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Submission> for SubmissionDto {
    fn from(submission: Submission) -> Self {
        Self {
            id: submission.id.into(),
            title: submission.title.into_inner(),
            author: submission.author.into_inner(),
            content: submission.content.into_inner(),
            description: submission.description,
            category: submission.category.into_inner(),
            approved: submission.approved,
            created_at: submission.created_at,
        }
    }
}

/// Outcome of approving a submission.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApprovalDto {
    pub slug: String,
    pub url: String,
    pub message: String,
}

impl ApprovalDto {
    pub fn for_path(slug: String, url: String) -> Self {
        let message = format!("Submission approved and article generated at {url}");
        Self { slug, url, message }
    }
}
