use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::slug::{SlugLookup, SlugScope};
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PostgresSlugLookup {
    pool: PgPool,
}

impl PostgresSlugLookup {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn table_for(scope: SlugScope) -> &'static str {
    match scope {
        SlugScope::Recipe => "recipes",
        SlugScope::Category => "categories",
    }
}

/// Escapes `LIKE` wildcards so the candidate is matched literally.
fn like_pattern(candidate: &str) -> String {
    let escaped = candidate
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

#[async_trait]
impl SlugLookup for PostgresSlugLookup {
    async fn contains_match(
        &self,
        scope: SlugScope,
        candidate: &str,
        exclude_id: Option<i64>,
    ) -> DomainResult<bool> {
        let sql = format!(
            "SELECT EXISTS (
                SELECT 1 FROM {} WHERE slug ILIKE $1 AND ($2::BIGINT IS NULL OR id <> $2)
             )",
            table_for(scope)
        );
        sqlx::query_scalar::<_, bool>(&sql)
            .bind(like_pattern(candidate))
            .bind(exclude_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }
}
