use std::sync::Arc;

use crate::application::queries::recipes::RecipeAssembler;
use crate::domain::recipe::RecipeReadRepository;

pub struct FavouriteQueryService {
    pub(super) recipe_repo: Arc<dyn RecipeReadRepository>,
    pub(super) assembler: Arc<RecipeAssembler>,
}

impl FavouriteQueryService {
    pub fn new(recipe_repo: Arc<dyn RecipeReadRepository>, assembler: Arc<RecipeAssembler>) -> Self {
        Self {
            recipe_repo,
            assembler,
        }
    }
}
