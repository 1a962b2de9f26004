use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        favourite::{FavouriteRepository, FavouriteToggle},
        recipe::{Recipe, RecipeReadRepository},
        slug::Slug,
    },
};

pub struct FavouriteCommandService {
    pub(super) favourites: Arc<dyn FavouriteRepository>,
    pub(super) recipe_repo: Arc<dyn RecipeReadRepository>,
    pub(super) toggle: FavouriteToggle,
    pub(super) clock: Arc<dyn Clock>,
}

impl FavouriteCommandService {
    pub fn new(
        favourites: Arc<dyn FavouriteRepository>,
        recipe_repo: Arc<dyn RecipeReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            toggle: FavouriteToggle::new(Arc::clone(&favourites)),
            favourites,
            recipe_repo,
            clock,
        }
    }

    /// Resolves a recipe by slug. Malformed slugs cannot match anything.
    pub(super) async fn recipe_by_slug(&self, slug: String) -> ApplicationResult<Recipe> {
        let slug = Slug::new(slug).map_err(|_| ApplicationError::not_found("recipe not found"))?;
        self.recipe_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("recipe not found"))
    }
}
