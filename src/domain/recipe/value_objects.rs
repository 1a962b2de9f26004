use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecipeId(pub i64);

impl RecipeId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("recipe id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<RecipeId> for i64 {
    fn from(value: RecipeId) -> Self {
        value.0
    }
}

pub const MAX_RECIPE_TITLE_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeTitle(String);

impl RecipeTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        if value.chars().count() > MAX_RECIPE_TITLE_LENGTH {
            return Err(DomainError::Validation(format!(
                "title must be at most {MAX_RECIPE_TITLE_LENGTH} characters"
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

impl fmt::Display for RecipeTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// HTML body text for ingredients and instructions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RichText(String);

impl RichText {
    pub fn new(field: &str, value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation(format!("{field} cannot be empty")));
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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minutes(i32);

impl Minutes {
    pub fn new(field: &str, value: i32) -> DomainResult<Self> {
        if value < 0 {
            return Err(DomainError::Validation(format!(
                "{field} cannot be negative"
            )));
        }
        Ok(Self(value))
    }

    pub fn get(&self) -> i32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Servings(i32);

impl Servings {
    pub fn new(value: i32) -> DomainResult<Self> {
        if value < 1 {
            return Err(DomainError::Validation(
                "servings must be at least 1".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn get(&self) -> i32 {
        self.0
    }
}
