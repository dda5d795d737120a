// tests/support/mocks/render.rs
use newsroom_core::application::ports::render::ArticleRenderer;
use newsroom_core::domain::errors::{DomainError, DomainResult};
use newsroom_core::domain::submission::Submission;

/// 常に失敗するレンダラー
pub struct FailingRenderer;

impl ArticleRenderer for FailingRenderer {
    fn render(&self, _submission: &Submission) -> DomainResult<String> {
        Err(DomainError::Render("renderer unavailable".into()))
    }
}
