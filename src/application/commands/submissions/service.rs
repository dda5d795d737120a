// src/application/commands/submissions/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{render::ArticleRenderer, time::Clock},
    domain::{
        article::services::ArticleSlugService,
        submission::{PublicationRepository, SubmissionRepository},
    },
};

pub struct SubmissionCommandService {
    pub(super) submissions: Arc<dyn SubmissionRepository>,
    pub(super) publisher: Arc<dyn PublicationRepository>,
    pub(super) renderer: Arc<dyn ArticleRenderer>,
    pub(super) slug_service: Arc<ArticleSlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl SubmissionCommandService {
    pub fn new(
        submissions: Arc<dyn SubmissionRepository>,
        publisher: Arc<dyn PublicationRepository>,
        renderer: Arc<dyn ArticleRenderer>,
        slug_service: Arc<ArticleSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            submissions,
            publisher,
            renderer,
            slug_service,
            clock,
        }
    }
}
