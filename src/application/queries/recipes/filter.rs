use super::RecipeQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, RecipeDto},
        error::ApplicationResult,
    },
    domain::{category::CategoryId, recipe::RecipeFilter},
};

pub struct FilterRecipesQuery {
    pub category: Option<i64>,
}

impl RecipeQueryService {
    /// Recipes of one category, newest first. Without a category nothing matches.
    pub async fn filter_by_category(
        &self,
        viewer: Option<&AuthenticatedUser>,
        query: FilterRecipesQuery,
    ) -> ApplicationResult<Vec<RecipeDto>> {
        let Some(category) = query.category else {
            return Ok(Vec::new());
        };
        let Ok(category_id) = CategoryId::new(category) else {
            return Ok(Vec::new());
        };

        let recipes = self
            .read_repo
            .list(&RecipeFilter::by_category(category_id), None)
            .await?;
        self.assembler.many(recipes, viewer).await
    }
}
