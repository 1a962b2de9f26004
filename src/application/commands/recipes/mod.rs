mod create;
mod delete;
mod service;
mod update;

pub use create::CreateRecipeCommand;
pub use delete::DeleteRecipeCommand;
pub use service::RecipeCommandService;
pub use update::UpdateRecipeCommand;
