use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::recipe::RecipeId;
use crate::domain::review::{
    NewReview, Rating, Review, ReviewComment, ReviewId, ReviewRepository, ReviewWithAuthor,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresReviewRepository {
    pool: PgPool,
}

impl PostgresReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReviewRow {
    id: i64,
    recipe_id: i64,
    user_id: i64,
    comment: String,
    rating: Option<i16>,
    created_date: NaiveDate,
}

impl TryFrom<ReviewRow> for Review {
    type Error = DomainError;

    fn try_from(row: ReviewRow) -> Result<Self, Self::Error> {
        Ok(Review {
            id: ReviewId::new(row.id)?,
            recipe_id: RecipeId::new(row.recipe_id)?,
            user_id: UserId::new(row.user_id)?,
            comment: ReviewComment::new(row.comment)?,
            rating: row.rating.map(Rating::new).transpose()?,
            created_date: row.created_date,
        })
    }
}

#[derive(Debug, FromRow)]
struct ReviewWithAuthorRow {
    #[sqlx(flatten)]
    review: ReviewRow,
    username: String,
}

#[async_trait]
impl ReviewRepository for PostgresReviewRepository {
    async fn insert(&self, review: NewReview) -> DomainResult<Review> {
        let row = sqlx::query_as::<_, ReviewRow>(
            "INSERT INTO reviews (recipe_id, user_id, comment, rating, created_date)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, recipe_id, user_id, comment, rating, created_date",
        )
        .bind(i64::from(review.recipe_id))
        .bind(i64::from(review.user_id))
        .bind(review.comment.as_str())
        .bind(review.rating.map(|r| r.get()))
        .bind(review.created_date)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Review::try_from(row)
    }

    async fn list_for_recipes(
        &self,
        recipe_ids: &[RecipeId],
    ) -> DomainResult<Vec<ReviewWithAuthor>> {
        if recipe_ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<i64> = recipe_ids.iter().map(|id| id.0).collect();
        let rows = sqlx::query_as::<_, ReviewWithAuthorRow>(
            "SELECT rv.id, rv.recipe_id, rv.user_id, rv.comment, rv.rating, rv.created_date,
                    u.username
             FROM reviews rv
             JOIN users u ON u.id = rv.user_id
             WHERE rv.recipe_id = ANY($1)
             ORDER BY rv.recipe_id, rv.id",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|row| {
                Ok(ReviewWithAuthor {
                    review: Review::try_from(row.review)?,
                    username: row.username,
                })
            })
            .collect()
    }
}
