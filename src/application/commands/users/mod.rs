mod activate;
mod login;
mod logout;
mod password;
mod register;
mod service;
mod update;

pub use activate::ActivateAccountCommand;
pub use login::LoginUserCommand;
pub use register::RegisterUserCommand;
pub use service::{AccountSettings, UserCommandService};
pub use update::UpdateProfileCommand;
