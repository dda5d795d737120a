//! Article rendering.
//!
//! Approved submissions are published as standalone HTML documents. The page
//! skeleton is built with maud; every user-supplied value goes through
//! [`escape::escape_html`] and is inserted pre-escaped, so the only markup
//! derived from user text is the `<p>`/`<br>` structure of the body.

pub mod escape;
pub mod paragraphs;

use crate::application::ports::render::ArticleRenderer;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::submission::Submission;
use maud::{DOCTYPE, Markup, PreEscaped, html};

use escape::escape_html;
use paragraphs::render_paragraphs;

const STYLE: &str = r"
body { margin: 0; background: #0f1115; color: #e5e7eb; font-family: system-ui, sans-serif; }
main { max-width: 48rem; margin: 0 auto; padding: 3rem 1.5rem; }
.category { text-transform: uppercase; letter-spacing: .08em; font-size: .75rem; color: #c27c4a; }
.article-title { font-size: 2.5rem; margin: .5rem 0 1rem; }
.byline { color: #9ca3af; font-size: .875rem; }
.summary p { font-size: 1.125rem; color: #d1d5db; }
.article-content p { line-height: 1.7; }
footer { text-align: center; padding: 2rem; }
footer a { color: #c27c4a; }
";

/// Renders submissions into the published article page.
#[derive(Debug, Clone)]
pub struct HtmlArticleRenderer {
    site_name: String,
}

impl HtmlArticleRenderer {
    pub fn new(site_name: impl Into<String>) -> Self {
        Self {
            site_name: site_name.into(),
        }
    }

    fn document(&self, submission: &Submission, body: &str) -> Markup {
        let heading = text(submission.title.as_str());
        let description = submission.description.trim();

        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (heading) " | " (text(&self.site_name)) }
                    @if !description.is_empty() {
                        meta name="description" content=(text(description));
                    }
                    style { (PreEscaped(STYLE)) }
                }
                body {
                    main {
                        header {
                            span class="category" { (text(submission.category.as_str())) }
                            h1 class="article-title" { (heading) }
                            div class="byline" {
                                span { "By " (text(submission.author.as_str())) }
                            }
                        }
                        @if !description.is_empty() {
                            div class="summary" {
                                p { (text(description)) }
                            }
                        }
                        article class="article-content" {
                            (PreEscaped(body))
                        }
                    }
                    footer {
                        a href="/news" { "Back to " (text(&self.site_name)) " news" }
                    }
                }
            }
        }
    }
}

impl Default for HtmlArticleRenderer {
    fn default() -> Self {
        Self::new("ETC Hub")
    }
}

impl ArticleRenderer for HtmlArticleRenderer {
    fn render(&self, submission: &Submission) -> DomainResult<String> {
        let body = render_body(submission.content.as_str()).map_err(|err| {
            tracing::error!(submission_id = %submission.id, error = %err, "render failed");
            err
        })?;
        Ok(self.document(submission, &body).into_string())
    }
}

/// Paragraph markup for the article body; fails when nothing survives
/// segmentation.
fn render_body(content: &str) -> DomainResult<String> {
    let paragraphs = render_paragraphs(content);
    if paragraphs.is_empty() {
        return Err(DomainError::Render("content has no paragraphs".into()));
    }
    Ok(paragraphs.join("\n"))
}

fn text(value: &str) -> PreEscaped<String> {
    PreEscaped(escape_html(value).into_owned())
}
