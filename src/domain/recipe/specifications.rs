use std::collections::HashSet;

use crate::domain::recipe::entity::Recipe;
use crate::domain::user::value_objects::{Capability, UserId};

/// Owner-or-any check for `recipes:<action>:own` / `recipes:<action>:any`.
pub struct CanModifyRecipeSpec<'a> {
    capabilities: &'a HashSet<Capability>,
    recipe: &'a Recipe,
    user_id: UserId,
}

impl<'a> CanModifyRecipeSpec<'a> {
    pub fn new(
        capabilities: &'a HashSet<Capability>,
        recipe: &'a Recipe,
        user_id: UserId,
    ) -> Self {
        Self {
            capabilities,
            recipe,
            user_id,
        }
    }

    pub fn is_satisfied_for(&self, action: &str) -> bool {
        self.has_capability(&format!("{action}:any"))
            || (self.has_capability(&format!("{action}:own"))
                && self.recipe.author_id == self.user_id)
    }

    fn has_capability(&self, action: &str) -> bool {
        self.capabilities
            .iter()
            .any(|cap| cap.matches("recipes", action))
    }
}
