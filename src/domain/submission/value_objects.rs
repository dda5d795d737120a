// src/domain/submission/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubmissionId(i64);

impl SubmissionId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "submission id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<SubmissionId> for i64 {
    fn from(value: SubmissionId) -> Self {
        value.0
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Declares a string newtype that must not be blank. `trim` controls whether
/// surrounding whitespace is stripped from the stored value; the optional
/// `max_chars` bounds the stored value in characters.
macro_rules! required_text {
    ($(#[$meta:meta])* $name:ident, $field:literal, trim = $trim:literal $(, max_chars = $max:expr)?) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> DomainResult<Self> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(DomainError::Validation(concat!($field, " is required").into()));
                }
                let value = if $trim { value.trim().to_string() } else { value };
                $(
                    if value.chars().count() > $max {
                        return Err(DomainError::Validation(format!(
                            concat!($field, " must be at most {} characters"),
                            $max
                        )));
                    }
                )?
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

/// Column width of `title` and `x_username` in the database schema.
pub const MAX_SHORT_TEXT_CHARS: usize = 255;

required_text!(SubmissionTitle, "title", trim = true, max_chars = MAX_SHORT_TEXT_CHARS);
required_text!(
    /// Public handle of the person who submitted the item.
    AuthorHandle,
    "author",
    trim = true,
    max_chars = MAX_SHORT_TEXT_CHARS
);
required_text!(
    /// Raw text as typed by the submitter; paragraph structure is preserved.
    SubmissionContent,
    "content",
    trim = false
);
