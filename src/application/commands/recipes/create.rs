// src/application/commands/recipes/create.rs
use super::RecipeCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, RecipeDto},
        error::ApplicationResult,
    },
    domain::{
        recipe::{Minutes, NewRecipe, RecipeTitle, RichText, Servings},
        slug::SlugScope,
    },
};

pub struct CreateRecipeCommand {
    pub category_id: i64,
    pub title: String,
    pub instructions: String,
    pub ingredients: String,
    pub prep_time: i32,
    pub cook_time: i32,
    pub servings: i32,
    pub image: Option<String>,
}

impl RecipeCommandService {
    pub async fn create_recipe(
        &self,
        actor: &AuthenticatedUser,
        command: CreateRecipeCommand,
    ) -> ApplicationResult<RecipeDto> {
        ensure_capability(actor, "recipes", "create")?;

        let title = RecipeTitle::new(command.title)?;
        let instructions = RichText::new("instructions", command.instructions)?;
        let ingredients = RichText::new("ingredients", command.ingredients)?;
        let prep_time = Minutes::new("prep_time", command.prep_time)?;
        let cook_time = Minutes::new("cook_time", command.cook_time)?;
        let servings = Servings::new(command.servings)?;
        let category_id = self.existing_category(command.category_id).await?;

        let slug = self
            .slug_resolver
            .resolve(SlugScope::Recipe, title.as_str(), None)
            .await?;

        let new_recipe = NewRecipe {
            author_id: actor.id,
            category_id,
            title,
            slug,
            instructions,
            ingredients,
            prep_time,
            cook_time,
            servings,
            image: command.image.filter(|path| !path.trim().is_empty()),
            created_at: self.clock.now(),
        };

        let created = self.write_repo.insert(new_recipe).await?;
        tracing::info!(recipe_id = created.id.0, slug = %created.slug, "recipe created");
        Ok(RecipeDto::from_parts(created, Vec::new(), false))
    }
}
