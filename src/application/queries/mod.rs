pub mod categories;
pub mod favourites;
pub mod recipes;
pub mod users;
