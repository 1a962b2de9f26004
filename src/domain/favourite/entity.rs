use crate::domain::recipe::RecipeId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// Membership of a recipe in a user's favourites. At most one per pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favourite {
    pub user_id: UserId,
    pub recipe_id: RecipeId,
    pub created_at: DateTime<Utc>,
}
