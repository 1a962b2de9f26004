use super::RecipeCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, RecipeDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        recipe::{
            Minutes, RecipeTitle, RecipeUpdate, RichText, Servings,
            specifications::CanModifyRecipeSpec,
        },
        slug::SlugScope,
    },
};

/// Fields left as `None` keep their current value. An empty `image` clears it.
#[derive(Default)]
pub struct UpdateRecipeCommand {
    pub id: i64,
    pub category_id: Option<i64>,
    pub title: Option<String>,
    pub instructions: Option<String>,
    pub ingredients: Option<String>,
    pub prep_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub servings: Option<i32>,
    pub image: Option<String>,
}

impl RecipeCommandService {
    pub async fn update_recipe(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateRecipeCommand,
    ) -> ApplicationResult<RecipeDto> {
        let recipe = self.load(command.id).await?;

        if !CanModifyRecipeSpec::new(&actor.capabilities, &recipe, actor.id)
            .is_satisfied_for("update")
        {
            return Err(ApplicationError::forbidden(
                "insufficient privileges to update recipe",
            ));
        }

        let mut update = RecipeUpdate::new(recipe.id, self.clock.now());

        if let Some(category_id) = command.category_id {
            update = update.with_category(self.existing_category(category_id).await?);
        }

        if let Some(title) = command.title {
            let title = RecipeTitle::new(title)?;
            if title != recipe.title {
                let slug = self
                    .slug_resolver
                    .resolve(SlugScope::Recipe, title.as_str(), Some(recipe.id.0))
                    .await?;
                update = update.with_title(title, slug);
            }
        }

        if let Some(instructions) = command.instructions {
            update = update.with_instructions(RichText::new("instructions", instructions)?);
        }
        if let Some(ingredients) = command.ingredients {
            update = update.with_ingredients(RichText::new("ingredients", ingredients)?);
        }
        if let Some(prep_time) = command.prep_time {
            update = update.with_prep_time(Minutes::new("prep_time", prep_time)?);
        }
        if let Some(cook_time) = command.cook_time {
            update = update.with_cook_time(Minutes::new("cook_time", cook_time)?);
        }
        if let Some(servings) = command.servings {
            update = update.with_servings(Servings::new(servings)?);
        }
        if let Some(image) = command.image {
            update = update.with_image(Some(image).filter(|path| !path.trim().is_empty()));
        }

        let updated = self.write_repo.update(update).await?;
        self.assembler.one(updated, Some(actor)).await
    }
}
