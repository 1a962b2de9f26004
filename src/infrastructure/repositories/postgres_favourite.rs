use std::collections::HashSet;

use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::favourite::{Favourite, FavouriteRepository};
use crate::domain::recipe::RecipeId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresFavouriteRepository {
    pool: PgPool,
}

impl PostgresFavouriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct FavouriteRow {
    user_id: i64,
    recipe_id: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<FavouriteRow> for Favourite {
    type Error = DomainError;

    fn try_from(row: FavouriteRow) -> Result<Self, Self::Error> {
        Ok(Favourite {
            user_id: UserId::new(row.user_id)?,
            recipe_id: RecipeId::new(row.recipe_id)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl FavouriteRepository for PostgresFavouriteRepository {
    async fn get_or_create(
        &self,
        user_id: UserId,
        recipe_id: RecipeId,
        now: DateTime<Utc>,
    ) -> DomainResult<(Favourite, bool)> {
        let inserted = sqlx::query_as::<_, FavouriteRow>(
            "INSERT INTO favourites (user_id, recipe_id, created_at)
             VALUES ($1, $2, $3)
             ON CONFLICT (user_id, recipe_id) DO NOTHING
             RETURNING user_id, recipe_id, created_at",
        )
        .bind(i64::from(user_id))
        .bind(i64::from(recipe_id))
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if let Some(row) = inserted {
            return Ok((Favourite::try_from(row)?, true));
        }

        // Lost a race with a concurrent delete when the row is gone again.
        match self.find(user_id, recipe_id).await? {
            Some(existing) => Ok((existing, false)),
            None => Err(DomainError::Conflict(
                "favourite changed concurrently".into(),
            )),
        }
    }

    async fn find(&self, user_id: UserId, recipe_id: RecipeId) -> DomainResult<Option<Favourite>> {
        let row = sqlx::query_as::<_, FavouriteRow>(
            "SELECT user_id, recipe_id, created_at FROM favourites
             WHERE user_id = $1 AND recipe_id = $2",
        )
        .bind(i64::from(user_id))
        .bind(i64::from(recipe_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Favourite::try_from).transpose()
    }

    async fn delete(&self, user_id: UserId, recipe_id: RecipeId) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM favourites WHERE user_id = $1 AND recipe_id = $2")
            .bind(i64::from(user_id))
            .bind(i64::from(recipe_id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected() > 0)
    }

    async fn favourited_among(
        &self,
        user_id: UserId,
        recipe_ids: &[RecipeId],
    ) -> DomainResult<HashSet<RecipeId>> {
        if recipe_ids.is_empty() {
            return Ok(HashSet::new());
        }
        let ids: Vec<i64> = recipe_ids.iter().map(|id| id.0).collect();
        let rows = sqlx::query_scalar::<_, i64>(
            "SELECT recipe_id FROM favourites WHERE user_id = $1 AND recipe_id = ANY($2)",
        )
        .bind(i64::from(user_id))
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(RecipeId::new).collect()
    }
}
