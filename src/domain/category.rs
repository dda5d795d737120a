// src/domain/category.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

const MAX_CATEGORY_LEN: usize = 50;

/// Section an item is filed under. Lowercase `[a-z0-9_-]`, at most 50 chars.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category(String);

impl Category {
    pub const DEFAULT: &'static str = "news";

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_lowercase();
        if value.is_empty() {
            return Err(DomainError::Validation("category cannot be empty".into()));
        }
        if value.len() > MAX_CATEGORY_LEN {
            return Err(DomainError::Validation(format!(
                "category must be at most {MAX_CATEGORY_LEN} characters"
            )));
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(DomainError::Validation(
                "category may only contain letters, digits, '-' and '_'".into(),
            ));
        }
        Ok(Self(value))
    }

    /// Blank input falls back to the default category.
    pub fn parse_or_default(value: Option<String>) -> DomainResult<Self> {
        match value {
            Some(v) if !v.trim().is_empty() => Self::new(v),
            _ => Ok(Self::default()),
        }
    }

    /// Read a previously stored category. Values that no longer validate
    /// fall back to the default.
    pub fn from_stored(value: Option<String>) -> Self {
        value.and_then(|c| Self::new(c).ok()).unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Default for Category {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
