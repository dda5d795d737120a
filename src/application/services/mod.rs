// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{articles::ArticleCommandService, submissions::SubmissionCommandService},
        ports::{render::ArticleRenderer, time::Clock},
        queries::{articles::ArticleQueryService, submissions::SubmissionQueryService},
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository, services::{ArticleSlugService, SlugGenerator}},
        submission::{PublicationRepository, SubmissionRepository},
    },
};

/// The moderation pipeline as seen by the presentation layer.
pub struct ApplicationServices {
    pub submission_commands: Arc<SubmissionCommandService>,
    pub submission_queries: Arc<SubmissionQueryService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        submission_repo: Arc<dyn SubmissionRepository>,
        publication_repo: Arc<dyn PublicationRepository>,
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        renderer: Arc<dyn ArticleRenderer>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let slug_service = Arc::new(ArticleSlugService::new(Arc::clone(&slugger)));

        let submission_commands = Arc::new(SubmissionCommandService::new(
            Arc::clone(&submission_repo),
            Arc::clone(&publication_repo),
            Arc::clone(&renderer),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));
        let submission_queries = Arc::new(SubmissionQueryService::new(Arc::clone(
            &submission_repo,
        )));

        let article_commands = Arc::new(ArticleCommandService::new(Arc::clone(
            &article_write_repo,
        )));
        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_read_repo)));

        Self {
            submission_commands,
            submission_queries,
            article_commands,
            article_queries,
        }
    }
}
