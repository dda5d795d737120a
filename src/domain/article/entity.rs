// src/domain/article/entity.rs
use crate::domain::article::value_objects::ArticleSlug;
use crate::domain::category::Category;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// A published article. `content` is the full rendered HTML document.
#[derive(Debug, Clone)]
pub struct Article {
    pub slug: ArticleSlug,
    pub title: String,
    pub author: String,
    pub description: String,
    pub content: String,
    pub category: Category,
    pub created_at: Option<DateTime<Utc>>,
}

impl Article {
    pub fn summary(&self) -> ArticleSummary {
        ArticleSummary {
            slug: self.slug.clone(),
            title: self.title.clone(),
            author: self.author.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            created_at: self.created_at,
        }
    }
}

/// Article metadata without the rendered body, as used by listings.
#[derive(Debug, Clone)]
pub struct ArticleSummary {
    pub slug: ArticleSlug,
    pub title: String,
    pub author: String,
    pub description: String,
    pub category: Category,
    pub created_at: Option<DateTime<Utc>>,
}

impl ArticleSummary {
    /// Metadata for an article that was stored without any, derived from the
    /// slug alone.
    pub fn untracked(slug: ArticleSlug) -> Self {
        Self {
            title: slug.as_str().replace('-', " "),
            slug,
            author: "Admin User".into(),
            description: String::new(),
            category: Category::default(),
            created_at: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub slug: ArticleSlug,
    pub title: String,
    pub author: String,
    pub description: String,
    pub content: String,
    pub category: Category,
    pub created_at: DateTime<Utc>,
}

/// Newest first. Entries without a timestamp go last, in reverse slug order.
pub fn newest_first(a: &ArticleSummary, b: &ArticleSummary) -> Ordering {
    match (a.created_at, b.created_at) {
        (Some(x), Some(y)) => y.cmp(&x).then_with(|| b.slug.cmp(&a.slug)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.slug.cmp(&a.slug),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn summary(slug: &str, created_at: Option<DateTime<Utc>>) -> ArticleSummary {
        ArticleSummary {
            created_at,
            ..ArticleSummary::untracked(ArticleSlug::new(slug).unwrap())
        }
    }

    #[test]
    fn untracked_metadata_defaults() {
        let s = ArticleSummary::untracked(ArticleSlug::new("network-upgrade-live").unwrap());
        assert_eq!(s.title, "network upgrade live");
        assert_eq!(s.author, "Admin User");
        assert_eq!(s.category.as_str(), "news");
        assert!(s.created_at.is_none());
    }

    #[test]
    fn ordering_puts_newest_first_and_untimestamped_last() {
        let now = Utc::now();
        let mut items = vec![
            summary("alpha", None),
            summary("older", Some(now - Duration::hours(2))),
            summary("zeta", None),
            summary("newer", Some(now)),
        ];
        items.sort_by(newest_first);
        let slugs: Vec<_> = items.iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(slugs, ["newer", "older", "zeta", "alpha"]);
    }
}
