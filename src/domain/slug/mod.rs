// src/domain/slug/mod.rs
//! URL-safe identifiers shared by recipes and categories.
//!
//! A slug is a non-empty string of lowercase ASCII letters, digits and
//! hyphens. Uniqueness is scoped per entity type (see [`SlugScope`]) and is
//! resolved by [`SlugResolver`].

pub mod repository;
pub mod resolver;

pub use repository::SlugLookup;
pub use resolver::{DEFAULT_MAX_ATTEMPTS, SUFFIX_LEN, SlugResolver};

use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if !is_slug_text(&value) {
            return Err(DomainError::Validation(format!(
                "slug '{value}' may only contain lowercase letters, digits and hyphens"
            )));
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

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

pub(crate) fn is_slug_text(value: &str) -> bool {
    value
        .chars()
        .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
}

/// Entity type a slug must be unique within.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlugScope {
    Recipe,
    Category,
}

impl SlugScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlugScope::Recipe => "recipe",
            SlugScope::Category => "category",
        }
    }

    /// Base candidate used when a title normalises to nothing.
    pub fn fallback(&self) -> &'static str {
        self.as_str()
    }

    /// Words that cannot be used as slugs in this scope. Recipe slugs share
    /// the `/recipes/` path namespace with the filter and search listings.
    pub fn reserved(&self) -> &'static [&'static str] {
        match self {
            SlugScope::Recipe => &["filter", "search"],
            SlugScope::Category => &[],
        }
    }

    pub fn is_reserved(&self, candidate: &str) -> bool {
        self.reserved()
            .iter()
            .any(|word| word.eq_ignore_ascii_case(candidate))
    }
}

impl fmt::Display for SlugScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
