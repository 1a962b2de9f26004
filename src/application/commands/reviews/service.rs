use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{recipe::RecipeReadRepository, review::ReviewRepository},
};

pub struct ReviewCommandService {
    pub(super) review_repo: Arc<dyn ReviewRepository>,
    pub(super) recipe_repo: Arc<dyn RecipeReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ReviewCommandService {
    pub fn new(
        review_repo: Arc<dyn ReviewRepository>,
        recipe_repo: Arc<dyn RecipeReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            review_repo,
            recipe_repo,
            clock,
        }
    }
}
