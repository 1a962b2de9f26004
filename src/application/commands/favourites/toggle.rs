use super::FavouriteCommandService;
use crate::application::{
    commands::capability::ensure_capability,
    dto::{AuthenticatedUser, FavouriteToggleDto},
    error::ApplicationResult,
};

pub struct ToggleFavouriteCommand {
    pub recipe_slug: String,
}

impl FavouriteCommandService {
    /// Adds the recipe to the caller's favourites, or removes it if present.
    pub async fn toggle_favourite(
        &self,
        actor: &AuthenticatedUser,
        command: ToggleFavouriteCommand,
    ) -> ApplicationResult<FavouriteToggleDto> {
        ensure_capability(actor, "favourites", "manage")?;
        let recipe = self.recipe_by_slug(command.recipe_slug).await?;
        let outcome = self
            .toggle
            .toggle(actor.id, recipe.id, self.clock.now())
            .await?;
        Ok(outcome.into())
    }
}
