// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::domain::article::ArticleWriteRepository;

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
}

impl ArticleCommandService {
    pub fn new(write_repo: Arc<dyn ArticleWriteRepository>) -> Self {
        Self { write_repo }
    }
}
