use super::ReviewCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, ReviewDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        review::{NewReview, Rating, ReviewComment, ReviewWithAuthor},
        slug::Slug,
    },
};

pub struct CreateReviewCommand {
    pub recipe_slug: String,
    pub comment: String,
    pub rating: Option<i16>,
}

impl ReviewCommandService {
    pub async fn create_review(
        &self,
        actor: &AuthenticatedUser,
        command: CreateReviewCommand,
    ) -> ApplicationResult<ReviewDto> {
        ensure_capability(actor, "reviews", "create")?;

        let slug = Slug::new(command.recipe_slug)
            .map_err(|_| ApplicationError::not_found("recipe not found"))?;
        let recipe = self
            .recipe_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("recipe not found"))?;

        let comment = ReviewComment::new(command.comment)?;
        let rating = command.rating.map(Rating::new).transpose()?;

        let review = self
            .review_repo
            .insert(NewReview {
                recipe_id: recipe.id,
                user_id: actor.id,
                comment,
                rating,
                created_date: self.clock.today(),
            })
            .await?;

        Ok(ReviewDto::from_parts(
            ReviewWithAuthor {
                review,
                username: actor.username.clone(),
            },
            recipe.title.as_str(),
        ))
    }
}
