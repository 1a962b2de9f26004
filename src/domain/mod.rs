// src/domain/mod.rs
pub mod category;
pub mod errors;
pub mod favourite;
pub mod recipe;
pub mod review;
pub mod slug;
pub mod user;
