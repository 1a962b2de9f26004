pub mod categories;
mod capability;
pub mod favourites;
pub mod recipes;
pub mod reviews;
pub mod users;
