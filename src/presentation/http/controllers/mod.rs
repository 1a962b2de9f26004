// src/presentation/http/controllers/mod.rs
pub mod auth;
pub mod categories;
pub mod favourites;
pub mod my_recipes;
pub mod profile;
pub mod recipes;
