use super::FavouriteCommandService;
use crate::application::{
    commands::capability::ensure_capability,
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};

pub struct RemoveFavouriteCommand {
    pub recipe_slug: String,
}

impl FavouriteCommandService {
    pub async fn remove_favourite(
        &self,
        actor: &AuthenticatedUser,
        command: RemoveFavouriteCommand,
    ) -> ApplicationResult<()> {
        ensure_capability(actor, "favourites", "manage")?;
        let recipe = self.recipe_by_slug(command.recipe_slug).await?;

        // Only the request whose delete removed the row reports success.
        if !self.favourites.delete(actor.id, recipe.id).await? {
            return Err(ApplicationError::not_found("recipe not in favourites"));
        }
        tracing::info!(user_id = actor.id.0, recipe_id = recipe.id.0, "favourite removed");
        Ok(())
    }
}
