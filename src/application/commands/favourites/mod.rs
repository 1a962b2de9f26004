mod remove;
mod service;
mod toggle;

pub use remove::RemoveFavouriteCommand;
pub use service::FavouriteCommandService;
pub use toggle::ToggleFavouriteCommand;
