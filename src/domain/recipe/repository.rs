use crate::domain::category::CategoryId;
use crate::domain::errors::DomainResult;
use crate::domain::recipe::entity::{NewRecipe, Recipe, RecipeUpdate};
use crate::domain::recipe::value_objects::RecipeId;
use crate::domain::slug::Slug;
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Optional narrowing applied to recipe listings. Results are always newest
/// first.
#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    pub author_id: Option<UserId>,
    pub category_id: Option<CategoryId>,
    /// Case-insensitive match on title, ingredients or any reviewer's username.
    pub search: Option<String>,
}

impl RecipeFilter {
    pub fn by_author(author_id: UserId) -> Self {
        Self {
            author_id: Some(author_id),
            ..Self::default()
        }
    }

    pub fn by_category(category_id: CategoryId) -> Self {
        Self {
            category_id: Some(category_id),
            ..Self::default()
        }
    }

    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
            ..Self::default()
        }
    }
}

#[async_trait]
pub trait RecipeWriteRepository: Send + Sync {
    async fn insert(&self, recipe: NewRecipe) -> DomainResult<Recipe>;
    async fn update(&self, update: RecipeUpdate) -> DomainResult<Recipe>;
    async fn delete(&self, id: RecipeId) -> DomainResult<()>;
}

#[async_trait]
pub trait RecipeReadRepository: Send + Sync {
    async fn find_by_id(&self, id: RecipeId) -> DomainResult<Option<Recipe>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Recipe>>;
    /// Every match, newest first, optionally capped at `limit` rows.
    async fn list(&self, filter: &RecipeFilter, limit: Option<u32>) -> DomainResult<Vec<Recipe>>;
    /// Returns one page plus the total number of matching rows.
    async fn list_page(
        &self,
        filter: &RecipeFilter,
        limit: u32,
        offset: u64,
    ) -> DomainResult<(Vec<Recipe>, u64)>;
    /// Recipes the user has favourited, most recently favourited first.
    async fn list_favourited_by(&self, user_id: UserId) -> DomainResult<Vec<Recipe>>;
}
