pub mod auth;
pub mod categories;
pub mod pagination;
pub mod recipes;
pub mod users;

pub use auth::{AuthTokenDto, AuthenticatedUser, SessionDto, TokenSubject};
pub use categories::CategoryDto;
pub use pagination::Page;
pub use recipes::{FavouriteStatus, FavouriteToggleDto, RecipeDto, ReviewDto};
pub use users::{ActivationDto, UserDto, UserProfileDto};
