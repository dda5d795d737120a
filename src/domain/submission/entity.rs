// src/domain/submission/entity.rs
use crate::domain::category::Category;
use crate::domain::submission::value_objects::{
    AuthorHandle, SubmissionContent, SubmissionId, SubmissionTitle,
};
use chrono::{DateTime, Utc};

/// A user-supplied item awaiting moderation.
#[derive(Debug, Clone)]
pub struct Submission {
    pub id: SubmissionId,
    pub title: SubmissionTitle,
    pub author: AuthorHandle,
    pub content: SubmissionContent,
    pub description: String,
    pub category: Category,
    pub approved: bool,
    /// Absent for records written before timestamps were kept.
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub title: SubmissionTitle,
    pub author: AuthorHandle,
    pub content: SubmissionContent,
    pub description: String,
    pub category: Category,
    pub created_at: DateTime<Utc>,
}

impl NewSubmission {
    pub fn into_submission(self, id: SubmissionId) -> Submission {
        Submission {
            id,
            title: self.title,
            author: self.author,
            content: self.content,
            description: self.description,
            category: self.category,
            approved: false,
            created_at: Some(self.created_at),
        }
    }
}
