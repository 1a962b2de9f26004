// src/application/queries/recipes/assembler.rs
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, RecipeDto, ReviewDto},
        error::ApplicationResult,
    },
    domain::{
        favourite::FavouriteRepository,
        recipe::{Recipe, RecipeId},
        review::{ReviewRepository, ReviewWithAuthor},
    },
};

/// Turns recipe rows into [`RecipeDto`]s with their reviews and the viewer's
/// favourite flag, using one query per concern for the whole batch.
pub struct RecipeAssembler {
    reviews: Arc<dyn ReviewRepository>,
    favourites: Arc<dyn FavouriteRepository>,
}

impl RecipeAssembler {
    pub fn new(
        reviews: Arc<dyn ReviewRepository>,
        favourites: Arc<dyn FavouriteRepository>,
    ) -> Self {
        Self {
            reviews,
            favourites,
        }
    }

    pub async fn many(
        &self,
        recipes: Vec<Recipe>,
        viewer: Option<&AuthenticatedUser>,
    ) -> ApplicationResult<Vec<RecipeDto>> {
        if recipes.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<RecipeId> = recipes.iter().map(|r| r.id).collect();

        let mut reviews_by_recipe: HashMap<RecipeId, Vec<ReviewWithAuthor>> = HashMap::new();
        for entry in self.reviews.list_for_recipes(&ids).await? {
            reviews_by_recipe
                .entry(entry.review.recipe_id)
                .or_default()
                .push(entry);
        }

        let favourited = match viewer {
            Some(user) => self.favourites.favourited_among(user.id, &ids).await?,
            None => HashSet::new(),
        };

        Ok(recipes
            .into_iter()
            .map(|recipe| {
                let reviews = reviews_by_recipe
                    .remove(&recipe.id)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|entry| ReviewDto::from_parts(entry, recipe.title.as_str()))
                    .collect();
                let is_favourited = favourited.contains(&recipe.id);
                RecipeDto::from_parts(recipe, reviews, is_favourited)
            })
            .collect())
    }

    pub async fn one(
        &self,
        recipe: Recipe,
        viewer: Option<&AuthenticatedUser>,
    ) -> ApplicationResult<RecipeDto> {
        let mut assembled = self.many(vec![recipe], viewer).await?;
        Ok(assembled.remove(0))
    }
}
