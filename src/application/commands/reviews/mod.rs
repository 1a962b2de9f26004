mod create;
mod service;

pub use create::CreateReviewCommand;
pub use service::ReviewCommandService;
