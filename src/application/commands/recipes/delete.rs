use super::RecipeCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::recipe::specifications::CanModifyRecipeSpec,
};

pub struct DeleteRecipeCommand {
    pub id: i64,
}

impl RecipeCommandService {
    pub async fn delete_recipe(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteRecipeCommand,
    ) -> ApplicationResult<()> {
        let recipe = self.load(command.id).await?;

        if !CanModifyRecipeSpec::new(&actor.capabilities, &recipe, actor.id)
            .is_satisfied_for("delete")
        {
            return Err(ApplicationError::forbidden(
                "insufficient privileges to delete recipe",
            ));
        }

        self.write_repo.delete(recipe.id).await?;
        tracing::info!(recipe_id = recipe.id.0, "recipe deleted");
        Ok(())
    }
}
