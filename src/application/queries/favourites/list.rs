use super::FavouriteQueryService;
use crate::application::{
    dto::{AuthenticatedUser, RecipeDto},
    error::ApplicationResult,
};

impl FavouriteQueryService {
    /// The caller's favourites, most recently favourited first.
    pub async fn list_favourites(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<RecipeDto>> {
        let recipes = self.recipe_repo.list_favourited_by(actor.id).await?;
        self.assembler.many(recipes, Some(actor)).await
    }
}
