use crate::domain::errors::DomainResult;
use crate::domain::recipe::RecipeId;
use crate::domain::review::entity::{NewReview, Review, ReviewWithAuthor};
use async_trait::async_trait;

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn insert(&self, review: NewReview) -> DomainResult<Review>;
    /// Reviews for every given recipe, oldest first within a recipe.
    async fn list_for_recipes(&self, recipe_ids: &[RecipeId])
    -> DomainResult<Vec<ReviewWithAuthor>>;
}
