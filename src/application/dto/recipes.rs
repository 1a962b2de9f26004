use crate::domain::favourite::ToggleOutcome;
use crate::domain::recipe::Recipe;
use crate::domain::review::ReviewWithAuthor;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReviewDto {
    pub id: i64,
    /// Username of the reviewer.
    pub user: String,
    /// Title of the reviewed recipe.
    pub recipe: String,
    pub comment: String,
    pub rating: Option<i16>,
    pub created_date: NaiveDate,
}

impl ReviewDto {
    pub fn from_parts(entry: ReviewWithAuthor, recipe_title: &str) -> Self {
        let ReviewWithAuthor { review, username } = entry;
        Self {
            id: review.id.into(),
            user: username,
            recipe: recipe_title.to_string(),
            comment: review.comment.into(),
            rating: review.rating.map(|r| r.get()),
            created_date: review.created_date,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecipeDto {
    pub id: i64,
    pub author: i64,
    pub category: i64,
    pub title: String,
    pub slug: String,
    pub image: Option<String>,
    pub prep_time: i32,
    pub cook_time: i32,
    pub servings: i32,
    pub ingredients: String,
    pub instructions: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub reviews: Vec<ReviewDto>,
    /// Whether the calling user has this recipe in their favourites.
    pub is_favourited: bool,
}

impl RecipeDto {
    pub fn from_parts(recipe: Recipe, reviews: Vec<ReviewDto>, is_favourited: bool) -> Self {
        Self {
            id: recipe.id.into(),
            author: recipe.author_id.into(),
            category: recipe.category_id.into(),
            title: recipe.title.into_inner(),
            slug: recipe.slug.into_inner(),
            image: recipe.image,
            prep_time: recipe.prep_time.get(),
            cook_time: recipe.cook_time.get(),
            servings: recipe.servings.get(),
            ingredients: recipe.ingredients.into_inner(),
            instructions: recipe.instructions.into_inner(),
            created_at: recipe.created_at,
            updated_at: recipe.updated_at,
            reviews,
            is_favourited,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FavouriteStatus {
    Added,
    Removed,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FavouriteToggleDto {
    pub status: FavouriteStatus,
    pub detail: String,
}

impl From<ToggleOutcome> for FavouriteToggleDto {
    fn from(outcome: ToggleOutcome) -> Self {
        match outcome {
            ToggleOutcome::Added => Self {
                status: FavouriteStatus::Added,
                detail: "recipe added to favourites".into(),
            },
            ToggleOutcome::Removed => Self {
                status: FavouriteStatus::Removed,
                detail: "recipe removed from favourites".into(),
            },
        }
    }
}
