// src/application/ports/render.rs
use crate::domain::{errors::DomainResult, submission::Submission};

pub trait ArticleRenderer: Send + Sync {
    /// Produce the HTML document published for `submission`.
    ///
    /// Fails with `DomainError::Render` when the content yields nothing to
    /// publish. Implementations must escape every user-supplied field.
    fn render(&self, submission: &Submission) -> DomainResult<String>;
}
