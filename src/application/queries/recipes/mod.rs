mod assembler;
mod filter;
mod get_by_slug;
mod home;
mod list;
mod mine;
mod search;
mod service;

pub use assembler::RecipeAssembler;
pub use filter::FilterRecipesQuery;
pub use get_by_slug::GetRecipeBySlugQuery;
pub use list::ListRecipesQuery;
pub use mine::GetMyRecipeQuery;
pub use search::SearchRecipesQuery;
pub use service::RecipeQueryService;
