use super::RecipeQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, RecipeDto},
        error::ApplicationResult,
    },
    domain::recipe::RecipeFilter,
};

pub(super) const HOME_RECIPES: u32 = 3;

impl RecipeQueryService {
    /// The most recently created recipes.
    pub async fn home(&self, viewer: Option<&AuthenticatedUser>) -> ApplicationResult<Vec<RecipeDto>> {
        let recipes = self
            .read_repo
            .list(&RecipeFilter::default(), Some(HOME_RECIPES))
            .await?;
        self.assembler.many(recipes, viewer).await
    }
}
