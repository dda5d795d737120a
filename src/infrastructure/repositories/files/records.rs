// On-disk JSON shapes for the file backend.
use crate::domain::Category;
use crate::domain::article::{Article, ArticleSlug, ArticleSummary};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::submission::{
    AuthorHandle, Submission, SubmissionContent, SubmissionId, SubmissionTitle,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of `submissions.json`. The author is stored under `xUsername`,
/// which is what existing data files use.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SubmissionRecord {
    pub id: i64,
    pub title: String,
    #[serde(rename = "xUsername", alias = "author")]
    pub author: String,
    pub content: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub approved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<&Submission> for SubmissionRecord {
    fn from(submission: &Submission) -> Self {
        Self {
            id: submission.id.into(),
            title: submission.title.as_str().to_owned(),
            author: submission.author.as_str().to_owned(),
            content: submission.content.as_str().to_owned(),
            description: submission.description.clone(),
            category: Some(submission.category.as_str().to_owned()),
            approved: submission.approved,
            created_at: submission.created_at,
        }
    }
}

impl TryFrom<SubmissionRecord> for Submission {
    type Error = DomainError;

    fn try_from(record: SubmissionRecord) -> DomainResult<Self> {
        Ok(Self {
            id: SubmissionId::new(record.id)?,
            title: SubmissionTitle::new(record.title)?,
            author: AuthorHandle::new(record.author)?,
            content: SubmissionContent::new(record.content)?,
            description: record.description,
            category: Category::from_stored(record.category),
            approved: record.approved,
            created_at: record.created_at,
        })
    }
}

/// One entry of `articles.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ArticleMetaRecord {
    pub slug: String,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ArticleMetaRecord {
    pub fn from_article(article: &Article) -> Self {
        Self {
            slug: article.slug.as_str().to_owned(),
            title: article.title.clone(),
            author: article.author.clone(),
            description: article.description.clone(),
            category: Some(article.category.as_str().to_owned()),
            created_at: article.created_at,
        }
    }

    pub fn into_summary(self, slug: ArticleSlug) -> ArticleSummary {
        ArticleSummary {
            slug,
            title: self.title,
            author: self.author,
            description: self.description,
            category: Category::from_stored(self.category),
            created_at: self.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_legacy_record_without_category_or_timestamp() {
        let raw = r#"{"id":3,"title":"Hi","xUsername":"etc_dev","content":"Body","description":"","approved":false}"#;
        let record: SubmissionRecord = serde_json::from_str(raw).unwrap();
        let submission = Submission::try_from(record).unwrap();
        assert_eq!(submission.author.as_str(), "etc_dev");
        assert_eq!(submission.category.as_str(), "news");
        assert!(submission.created_at.is_none());
    }

    #[test]
    fn writes_author_under_legacy_key() {
        let raw = r#"{"id":1,"title":"t","author":"a","content":"c"}"#;
        let record: SubmissionRecord = serde_json::from_str(raw).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["xUsername"], "a");
        assert!(json.get("author").is_none());
    }

    #[test]
    fn blank_title_is_rejected_on_load() {
        let raw = r#"{"id":1,"title":"  ","xUsername":"a","content":"c"}"#;
        let record: SubmissionRecord = serde_json::from_str(raw).unwrap();
        assert!(Submission::try_from(record).is_err());
    }
}
