// src/domain/favourite/services.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::favourite::FavouriteRepository;
use crate::domain::recipe::RecipeId;
use crate::domain::user::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

/// Flips favourite membership for a `(user, recipe)` pair.
///
/// Creation goes through the repository's get-or-create. If the pair already
/// existed (or a concurrent insert raced us and surfaced as a conflict) the
/// membership is deleted instead.
pub struct FavouriteToggle {
    favourites: Arc<dyn FavouriteRepository>,
}

impl FavouriteToggle {
    pub fn new(favourites: Arc<dyn FavouriteRepository>) -> Self {
        Self { favourites }
    }

    pub async fn toggle(
        &self,
        user_id: UserId,
        recipe_id: RecipeId,
        now: DateTime<Utc>,
    ) -> DomainResult<ToggleOutcome> {
        let created = match self.favourites.get_or_create(user_id, recipe_id, now).await {
            Ok((_, created)) => created,
            Err(DomainError::Conflict(_)) => false,
            Err(err) => return Err(err),
        };

        if created {
            tracing::info!(user_id = user_id.0, recipe_id = recipe_id.0, "favourite added");
            return Ok(ToggleOutcome::Added);
        }

        self.favourites.delete(user_id, recipe_id).await?;
        tracing::info!(user_id = user_id.0, recipe_id = recipe_id.0, "favourite removed");
        Ok(ToggleOutcome::Removed)
    }
}
