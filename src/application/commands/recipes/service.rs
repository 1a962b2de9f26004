// src/application/commands/recipes/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
        queries::recipes::RecipeAssembler,
    },
    domain::{
        category::{CategoryId, CategoryRepository},
        recipe::{Recipe, RecipeId, RecipeReadRepository, RecipeWriteRepository},
        slug::SlugResolver,
    },
};

pub struct RecipeCommandService {
    pub(super) write_repo: Arc<dyn RecipeWriteRepository>,
    pub(super) read_repo: Arc<dyn RecipeReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) slug_resolver: Arc<SlugResolver>,
    pub(super) assembler: Arc<RecipeAssembler>,
    pub(super) clock: Arc<dyn Clock>,
}

impl RecipeCommandService {
    pub fn new(
        write_repo: Arc<dyn RecipeWriteRepository>,
        read_repo: Arc<dyn RecipeReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        slug_resolver: Arc<SlugResolver>,
        assembler: Arc<RecipeAssembler>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            category_repo,
            slug_resolver,
            assembler,
            clock,
        }
    }

    pub(super) async fn existing_category(&self, id: i64) -> ApplicationResult<CategoryId> {
        let id = CategoryId::new(id)?;
        match self.category_repo.find_by_id(id).await? {
            Some(category) => Ok(category.id),
            None => Err(ApplicationError::validation(format!(
                "category {} does not exist",
                id.0
            ))),
        }
    }

    pub(super) async fn load(&self, id: i64) -> ApplicationResult<Recipe> {
        let id = RecipeId::new(id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("recipe not found"))
    }
}
