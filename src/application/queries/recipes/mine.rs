use super::RecipeQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, RecipeDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::recipe::{RecipeFilter, RecipeId},
};

pub struct GetMyRecipeQuery {
    pub id: i64,
}

impl RecipeQueryService {
    pub async fn list_my_recipes(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<RecipeDto>> {
        let recipes = self
            .read_repo
            .list(&RecipeFilter::by_author(actor.id), None)
            .await?;
        self.assembler.many(recipes, Some(actor)).await
    }

    /// Other users' recipes are reported as missing.
    pub async fn get_my_recipe(
        &self,
        actor: &AuthenticatedUser,
        query: GetMyRecipeQuery,
    ) -> ApplicationResult<RecipeDto> {
        let id = RecipeId::new(query.id)?;
        let recipe = self
            .read_repo
            .find_by_id(id)
            .await?
            .filter(|recipe| recipe.author_id == actor.id)
            .ok_or_else(|| ApplicationError::not_found("recipe not found"))?;

        self.assembler.one(recipe, Some(actor)).await
    }
}
