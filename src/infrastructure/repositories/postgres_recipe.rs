// src/infrastructure/repositories/postgres_recipe.rs
use super::map_sqlx;
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::recipe::{
    Minutes, NewRecipe, Recipe, RecipeFilter, RecipeId, RecipeReadRepository, RecipeTitle,
    RecipeUpdate, RecipeWriteRepository, RichText, Servings,
};
use crate::domain::slug::Slug;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const RECIPE_COLUMNS: &str = "r.id, r.author_id, r.category_id, r.title, r.slug, r.instructions, \
     r.ingredients, r.prep_time, r.cook_time, r.servings, r.image, r.created_at, r.updated_at";

#[derive(Clone)]
pub struct PostgresRecipeWriteRepository {
    pool: PgPool,
}

impl PostgresRecipeWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresRecipeReadRepository {
    pool: PgPool,
}

impl PostgresRecipeReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RecipeRow {
    id: i64,
    author_id: i64,
    category_id: i64,
    title: String,
    slug: String,
    instructions: String,
    ingredients: String,
    prep_time: i32,
    cook_time: i32,
    servings: i32,
    image: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<RecipeRow> for Recipe {
    type Error = DomainError;

    fn try_from(row: RecipeRow) -> Result<Self, Self::Error> {
        Ok(Recipe {
            id: RecipeId::new(row.id)?,
            author_id: UserId::new(row.author_id)?,
            category_id: CategoryId::new(row.category_id)?,
            title: RecipeTitle::new(row.title)?,
            slug: Slug::new(row.slug)?,
            instructions: RichText::new("instructions", row.instructions)?,
            ingredients: RichText::new("ingredients", row.ingredients)?,
            prep_time: Minutes::new("prep_time", row.prep_time)?,
            cook_time: Minutes::new("cook_time", row.cook_time)?,
            servings: Servings::new(row.servings)?,
            image: row.image,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn returning_columns() -> String {
    RECIPE_COLUMNS.replace("r.", "")
}

#[async_trait]
impl RecipeWriteRepository for PostgresRecipeWriteRepository {
    async fn insert(&self, recipe: NewRecipe) -> DomainResult<Recipe> {
        let NewRecipe {
            author_id,
            category_id,
            title,
            slug,
            instructions,
            ingredients,
            prep_time,
            cook_time,
            servings,
            image,
            created_at,
        } = recipe;

        let sql = format!(
            "INSERT INTO recipes (author_id, category_id, title, slug, instructions, ingredients,
                                  prep_time, cook_time, servings, image, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $11)
             RETURNING {}",
            returning_columns()
        );
        let row = sqlx::query_as::<_, RecipeRow>(&sql)
            .bind(i64::from(author_id))
            .bind(i64::from(category_id))
            .bind(title.as_str())
            .bind(slug.as_str())
            .bind(instructions.as_str())
            .bind(ingredients.as_str())
            .bind(prep_time.get())
            .bind(cook_time.get())
            .bind(servings.get())
            .bind(image)
            .bind(created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Recipe::try_from(row)
    }

    async fn update(&self, update: RecipeUpdate) -> DomainResult<Recipe> {
        let RecipeUpdate {
            id,
            category_id,
            title,
            slug,
            instructions,
            ingredients,
            prep_time,
            cook_time,
            servings,
            image,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE recipes SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(category_id) = category_id {
            builder.push(", category_id = ");
            builder.push_bind(i64::from(category_id));
        }
        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }
        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }
        if let Some(instructions) = instructions {
            builder.push(", instructions = ");
            builder.push_bind(instructions.into_inner());
        }
        if let Some(ingredients) = ingredients {
            builder.push(", ingredients = ");
            builder.push_bind(ingredients.into_inner());
        }
        if let Some(prep_time) = prep_time {
            builder.push(", prep_time = ");
            builder.push_bind(prep_time.get());
        }
        if let Some(cook_time) = cook_time {
            builder.push(", cook_time = ");
            builder.push_bind(cook_time.get());
        }
        if let Some(servings) = servings {
            builder.push(", servings = ");
            builder.push_bind(servings.get());
        }
        if let Some(image) = image {
            builder.push(", image = ");
            builder.push_bind(image);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(returning_columns());

        let row = builder
            .build_query_as::<RecipeRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("recipe not found".into()))?;

        Recipe::try_from(row)
    }

    async fn delete(&self, id: RecipeId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("recipe not found".into()));
        }
        Ok(())
    }
}

impl PostgresRecipeReadRepository {
    fn apply_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &RecipeFilter) {
        builder.push(" WHERE TRUE");

        if let Some(author_id) = filter.author_id {
            builder.push(" AND r.author_id = ");
            builder.push_bind(i64::from(author_id));
        }

        if let Some(category_id) = filter.category_id {
            builder.push(" AND r.category_id = ");
            builder.push_bind(i64::from(category_id));
        }

        if let Some(term) = &filter.search {
            let pattern = format!("%{}%", escape_like(term));
            builder.push(" AND (r.title ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR r.ingredients ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(
                " OR EXISTS (SELECT 1 FROM reviews rv JOIN users u ON u.id = rv.user_id \
                 WHERE rv.recipe_id = r.id AND u.username ILIKE ",
            );
            builder.push_bind(pattern);
            builder.push("))");
        }
    }

    async fn fetch_rows(&self, mut builder: QueryBuilder<'_, Postgres>) -> DomainResult<Vec<Recipe>> {
        let rows = builder
            .build_query_as::<RecipeRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Recipe::try_from).collect()
    }

    async fn find_one(&self, column: &str, value: QueryValue<'_>) -> DomainResult<Option<Recipe>> {
        let sql = format!("SELECT {RECIPE_COLUMNS} FROM recipes r WHERE r.{column} = $1");
        let query = sqlx::query_as::<_, RecipeRow>(&sql);
        let query = match value {
            QueryValue::Id(id) => query.bind(id),
            QueryValue::Text(text) => query.bind(text),
        };
        let row = query
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Recipe::try_from).transpose()
    }
}

enum QueryValue<'q> {
    Id(i64),
    Text(&'q str),
}

fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[async_trait]
impl RecipeReadRepository for PostgresRecipeReadRepository {
    async fn find_by_id(&self, id: RecipeId) -> DomainResult<Option<Recipe>> {
        self.find_one("id", QueryValue::Id(id.0)).await
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Recipe>> {
        self.find_one("slug", QueryValue::Text(slug.as_str())).await
    }

    async fn list(&self, filter: &RecipeFilter, limit: Option<u32>) -> DomainResult<Vec<Recipe>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {RECIPE_COLUMNS} FROM recipes r"));
        Self::apply_filter(&mut builder, filter);
        builder.push(" ORDER BY r.created_at DESC, r.id DESC");
        if let Some(limit) = limit {
            builder.push(" LIMIT ");
            builder.push_bind(i64::from(limit));
        }
        self.fetch_rows(builder).await
    }

    async fn list_page(
        &self,
        filter: &RecipeFilter,
        limit: u32,
        offset: u64,
    ) -> DomainResult<(Vec<Recipe>, u64)> {
        let mut count: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(1) FROM recipes r");
        Self::apply_filter(&mut count, filter);
        let total = count
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {RECIPE_COLUMNS} FROM recipes r"));
        Self::apply_filter(&mut builder, filter);
        builder.push(" ORDER BY r.created_at DESC, r.id DESC LIMIT ");
        builder.push_bind(i64::from(limit));
        builder.push(" OFFSET ");
        builder.push_bind(i64::try_from(offset).unwrap_or(i64::MAX));

        let recipes = self.fetch_rows(builder).await?;
        Ok((recipes, total.max(0) as u64))
    }

    async fn list_favourited_by(&self, user_id: UserId) -> DomainResult<Vec<Recipe>> {
        let sql = format!(
            "SELECT {RECIPE_COLUMNS} FROM recipes r
             JOIN favourites f ON f.recipe_id = r.id
             WHERE f.user_id = $1
             ORDER BY f.created_at DESC, r.id DESC"
        );
        let rows = sqlx::query_as::<_, RecipeRow>(&sql)
            .bind(i64::from(user_id))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Recipe::try_from).collect()
    }
}
