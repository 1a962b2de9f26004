// src/domain/recipe/mod.rs
pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{NewRecipe, Recipe, RecipeUpdate};
pub use repository::{RecipeFilter, RecipeReadRepository, RecipeWriteRepository};
pub use value_objects::{Minutes, RecipeId, RecipeTitle, RichText, Servings};
