use super::RecipeQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, RecipeDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::slug::Slug,
};

pub struct GetRecipeBySlugQuery {
    pub slug: String,
}

impl RecipeQueryService {
    pub async fn get_recipe_by_slug(
        &self,
        viewer: Option<&AuthenticatedUser>,
        query: GetRecipeBySlugQuery,
    ) -> ApplicationResult<RecipeDto> {
        let slug =
            Slug::new(query.slug).map_err(|_| ApplicationError::not_found("recipe not found"))?;
        let recipe = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("recipe not found"))?;

        self.assembler.one(recipe, viewer).await
    }
}
