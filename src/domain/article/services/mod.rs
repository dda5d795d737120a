// src/domain/article/services/mod.rs
use std::sync::Arc;

use crate::domain::article::value_objects::ArticleSlug;
use crate::domain::errors::DomainResult;
use crate::domain::submission::{Submission, SubmissionId};

pub trait SlugGenerator: Send + Sync {
    /// Derive a URL-safe slug from `input`. May return an empty string when
    /// nothing in the input survives; callers decide the fallback.
    fn slugify(&self, input: &str) -> String;
}

/// Domain service responsible for deriving article slugs from submissions.
pub struct ArticleSlugService {
    generator: Arc<dyn SlugGenerator>,
}

impl ArticleSlugService {
    pub fn new(generator: Arc<dyn SlugGenerator>) -> Self {
        Self { generator }
    }

    /// Slug of the article an approved submission becomes.
    ///
    /// Titles that slugify to nothing (punctuation only, non-Latin script)
    /// fall back to `submission-{id}` so the result stays deterministic.
    pub fn slug_for(&self, submission: &Submission) -> DomainResult<ArticleSlug> {
        self.slug_from_title(submission.title.as_str(), submission.id)
    }

    pub fn slug_from_title(&self, title: &str, id: SubmissionId) -> DomainResult<ArticleSlug> {
        let base = self.generator.slugify(title);
        if base.is_empty() {
            ArticleSlug::new(format!("submission-{id}"))
        } else {
            ArticleSlug::new(base)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    impl SlugGenerator for Echo {
        fn slugify(&self, input: &str) -> String {
            input.to_string()
        }
    }

    #[test]
    fn uses_generator_output() {
        let service = ArticleSlugService::new(Arc::new(Echo));
        let slug = service
            .slug_from_title("network-upgrade", SubmissionId::new(3).unwrap())
            .unwrap();
        assert_eq!(slug.as_str(), "network-upgrade");
    }

    #[test]
    fn empty_slug_falls_back_to_submission_id() {
        let service = ArticleSlugService::new(Arc::new(Echo));
        let slug = service
            .slug_from_title("", SubmissionId::new(12).unwrap())
            .unwrap();
        assert_eq!(slug.as_str(), "submission-12");
    }
}
