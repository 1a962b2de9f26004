// src/domain/favourite/mod.rs
pub mod entity;
pub mod repository;
pub mod services;

pub use entity::Favourite;
pub use repository::FavouriteRepository;
pub use services::{FavouriteToggle, ToggleOutcome};
