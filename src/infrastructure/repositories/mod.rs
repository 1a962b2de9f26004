// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_category;
mod postgres_favourite;
mod postgres_recipe;
mod postgres_review;
mod postgres_slug;
mod postgres_user;

pub(crate) use error::map_sqlx;

pub use postgres_category::PostgresCategoryRepository;
pub use postgres_favourite::PostgresFavouriteRepository;
pub use postgres_recipe::{PostgresRecipeReadRepository, PostgresRecipeWriteRepository};
pub use postgres_review::PostgresReviewRepository;
pub use postgres_slug::PostgresSlugLookup;
pub use postgres_user::PostgresUserRepository;
