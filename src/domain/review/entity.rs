use crate::domain::recipe::RecipeId;
use crate::domain::review::value_objects::{Rating, ReviewComment, ReviewId};
use crate::domain::user::UserId;
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct Review {
    pub id: ReviewId,
    pub recipe_id: RecipeId,
    pub user_id: UserId,
    pub comment: ReviewComment,
    pub rating: Option<Rating>,
    pub created_date: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct NewReview {
    pub recipe_id: RecipeId,
    pub user_id: UserId,
    pub comment: ReviewComment,
    pub rating: Option<Rating>,
    pub created_date: NaiveDate,
}

/// A review joined with its author's username for display.
#[derive(Debug, Clone)]
pub struct ReviewWithAuthor {
    pub review: Review,
    pub username: String,
}
