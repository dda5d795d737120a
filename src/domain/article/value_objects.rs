use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// URL-safe identifier of a published article.
///
/// Only lowercase ASCII letters, digits, `_` and `-` are accepted, with no
/// leading, trailing or doubled hyphen. This is exactly the output alphabet of
/// the title slugger, and it keeps slugs safe to use as file names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleSlug(String);

impl ArticleSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        let valid_chars = value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-');
        if !valid_chars
            || value.starts_with('-')
            || value.ends_with('-')
            || value.contains("--")
        {
            return Err(DomainError::Validation(format!("invalid slug: {value}")));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Path under which the rendered page is served.
    pub fn public_path(&self) -> String {
        format!("/news/{}", self.0)
    }
}

impl fmt::Display for ArticleSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleSlug> for String {
    fn from(value: ArticleSlug) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_slugger_output() {
        assert!(ArticleSlug::new("etc-mining_guide-2024").is_ok());
    }

    #[test]
    fn rejects_path_segments_and_uppercase() {
        for bad in ["", "../etc", "a/b", "Upper", "-lead", "trail-", "dou--ble", "dot.html"] {
            assert!(ArticleSlug::new(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn public_path_points_at_news() {
        let slug = ArticleSlug::new("hello-world").unwrap();
        assert_eq!(slug.public_path(), "/news/hello-world");
    }
}
