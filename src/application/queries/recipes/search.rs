use super::RecipeQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, RecipeDto},
        error::ApplicationResult,
    },
    domain::recipe::RecipeFilter,
};

pub struct SearchRecipesQuery {
    pub search: Option<String>,
}

impl RecipeQueryService {
    /// Case-insensitive search over title, ingredients and reviewer usernames.
    /// A blank term returns every recipe.
    pub async fn search_recipes(
        &self,
        viewer: Option<&AuthenticatedUser>,
        query: SearchRecipesQuery,
    ) -> ApplicationResult<Vec<RecipeDto>> {
        let filter = match query.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => RecipeFilter::search(term),
            _ => RecipeFilter::default(),
        };

        let recipes = self.read_repo.list(&filter, None).await?;
        self.assembler.many(recipes, viewer).await
    }
}
