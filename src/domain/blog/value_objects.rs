use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;
use uuid::Uuid;

pub const TITLE_MAX_CHARS: usize = 200;
pub const SLUG_MAX_CHARS: usize = 220;
pub const META_MAX_CHARS: usize = 200;
pub const READ_TIME_MIN: i32 = 1;
pub const READ_TIME_MAX: i32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlogId(pub Uuid);

impl BlogId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns `None` when `value` is not in the id format; callers use this to
    /// decide between an id lookup and a slug lookup.
    pub fn parse(value: &str) -> Option<Self> {
        Uuid::parse_str(value.trim()).ok().map(Self)
    }
}

impl From<BlogId> for Uuid {
    fn from(value: BlogId) -> Self {
        value.0
    }
}

impl fmt::Display for BlogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

fn bounded_text(value: String, field: &str, max: usize) -> DomainResult<String> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{field} cannot be empty")));
    }
    if value.chars().count() > max {
        return Err(DomainError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(value)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogTitle(String);

impl BlogTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        bounded_text(value.into().trim().to_string(), "title", TITLE_MAX_CHARS).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for BlogTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A normalized, URL-safe slug: lowercase ascii alphanumerics separated by single hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlogSlug(String);

impl BlogSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let well_formed = !value.is_empty()
            && value.len() <= SLUG_MAX_CHARS
            && !value.starts_with('-')
            && !value.ends_with('-')
            && !value.contains("--")
            && value
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

        if well_formed {
            Ok(Self(value))
        } else {
            Err(DomainError::Validation(
                "slug must be lowercase kebab-case of at most 220 characters".into(),
            ))
        }
    }

    pub(super) fn from_normalized(value: String) -> Self {
        debug_assert!(Self::new(value.clone()).is_ok(), "malformed slug: {value}");
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for BlogSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogContent(String);

impl BlogContent {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("content cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First `max` characters of the content with surrounding whitespace removed.
    pub fn excerpt(&self, max: usize) -> String {
        self.0.trim().chars().take(max).collect::<String>().trim_end().to_string()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverImageUrl(String);

impl CoverImageUrl {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("image required".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReadTime(i32);

impl ReadTime {
    pub fn new(minutes: i32) -> DomainResult<Self> {
        if (READ_TIME_MIN..=READ_TIME_MAX).contains(&minutes) {
            Ok(Self(minutes))
        } else {
            Err(DomainError::Validation(format!(
                "read time must be between {READ_TIME_MIN} and {READ_TIME_MAX} minutes"
            )))
        }
    }

    pub fn minutes(self) -> i32 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTitle(String);

impl MetaTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        bounded_text(value.into(), "meta title", META_MAX_CHARS).map(Self)
    }

    pub fn from_title(title: &BlogTitle) -> Self {
        Self(title.as_str().chars().take(META_MAX_CHARS).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaDescription(String);

impl MetaDescription {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        bounded_text(value.into(), "meta description", META_MAX_CHARS).map(Self)
    }

    pub fn from_content(content: &BlogContent) -> Self {
        Self(content.excerpt(META_MAX_CHARS))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
