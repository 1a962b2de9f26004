// src/domain/review/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewReview, Review, ReviewWithAuthor};
pub use repository::ReviewRepository;
pub use value_objects::{Rating, ReviewComment, ReviewId};
