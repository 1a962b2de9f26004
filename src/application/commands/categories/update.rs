use super::CategoryCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, CategoryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        category::{CategoryId, CategoryTitle, CategoryUpdate},
        slug::SlugScope,
    },
};

pub struct UpdateCategoryCommand {
    pub id: i64,
    pub title: String,
}

impl CategoryCommandService {
    /// Renames a category. The slug is only regenerated when the title changes.
    pub async fn update_category(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        ensure_capability(actor, "categories", "manage")?;

        let id = CategoryId::new(command.id)?;
        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        let title = CategoryTitle::new(command.title)?;
        if title == existing.title {
            return Ok(existing.into());
        }

        let slug = self
            .slug_resolver
            .resolve(SlugScope::Category, title.as_str(), Some(id.0))
            .await?;
        let updated = self.repo.update(CategoryUpdate { id, title, slug }).await?;
        Ok(updated.into())
    }
}
