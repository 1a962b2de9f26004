use std::collections::HashSet;

use crate::domain::errors::DomainResult;
use crate::domain::favourite::entity::Favourite;
use crate::domain::recipe::RecipeId;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait FavouriteRepository: Send + Sync {
    /// Returns the favourite for the pair and whether this call created it.
    ///
    /// May fail with [`DomainError::Conflict`](crate::domain::errors::DomainError)
    /// when a concurrent insert wins the race.
    async fn get_or_create(
        &self,
        user_id: UserId,
        recipe_id: RecipeId,
        now: chrono::DateTime<chrono::Utc>,
    ) -> DomainResult<(Favourite, bool)>;
    async fn find(&self, user_id: UserId, recipe_id: RecipeId) -> DomainResult<Option<Favourite>>;
    /// Returns false when there was nothing to delete.
    async fn delete(&self, user_id: UserId, recipe_id: RecipeId) -> DomainResult<bool>;
    async fn favourited_among(
        &self,
        user_id: UserId,
        recipe_ids: &[RecipeId],
    ) -> DomainResult<HashSet<RecipeId>>;
}
