// src/domain/recipe/entity.rs
use crate::domain::category::CategoryId;
use crate::domain::recipe::value_objects::{Minutes, RecipeId, RecipeTitle, RichText, Servings};
use crate::domain::slug::Slug;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Recipe {
    pub id: RecipeId,
    pub author_id: UserId,
    pub category_id: CategoryId,
    pub title: RecipeTitle,
    pub slug: Slug,
    pub instructions: RichText,
    pub ingredients: RichText,
    pub prep_time: Minutes,
    pub cook_time: Minutes,
    pub servings: Servings,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub author_id: UserId,
    pub category_id: CategoryId,
    pub title: RecipeTitle,
    pub slug: Slug,
    pub instructions: RichText,
    pub ingredients: RichText,
    pub prep_time: Minutes,
    pub cook_time: Minutes,
    pub servings: Servings,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct RecipeUpdate {
    pub id: RecipeId,
    pub category_id: Option<CategoryId>,
    pub title: Option<RecipeTitle>,
    pub slug: Option<Slug>,
    pub instructions: Option<RichText>,
    pub ingredients: Option<RichText>,
    pub prep_time: Option<Minutes>,
    pub cook_time: Option<Minutes>,
    pub servings: Option<Servings>,
    pub image: Option<Option<String>>,
    pub updated_at: DateTime<Utc>,
}

impl RecipeUpdate {
    pub fn new(id: RecipeId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            category_id: None,
            title: None,
            slug: None,
            instructions: None,
            ingredients: None,
            prep_time: None,
            cook_time: None,
            servings: None,
            image: None,
            updated_at,
        }
    }

    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// A retitle always carries the slug resolved for the new title.
    pub fn with_title(mut self, title: RecipeTitle, slug: Slug) -> Self {
        self.title = Some(title);
        self.slug = Some(slug);
        self
    }

    pub fn with_instructions(mut self, instructions: RichText) -> Self {
        self.instructions = Some(instructions);
        self
    }

    pub fn with_ingredients(mut self, ingredients: RichText) -> Self {
        self.ingredients = Some(ingredients);
        self
    }

    pub fn with_prep_time(mut self, prep_time: Minutes) -> Self {
        self.prep_time = Some(prep_time);
        self
    }

    pub fn with_cook_time(mut self, cook_time: Minutes) -> Self {
        self.cook_time = Some(cook_time);
        self
    }

    pub fn with_servings(mut self, servings: Servings) -> Self {
        self.servings = Some(servings);
        self
    }

    pub fn with_image(mut self, image: Option<String>) -> Self {
        self.image = Some(image);
        self
    }
}
