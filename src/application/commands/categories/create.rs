use super::CategoryCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, CategoryDto},
        error::ApplicationResult,
    },
    domain::{
        category::{CategoryTitle, NewCategory},
        slug::SlugScope,
    },
};

pub struct CreateCategoryCommand {
    pub title: String,
}

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        ensure_capability(actor, "categories", "manage")?;

        let title = CategoryTitle::new(command.title)?;
        let slug = self
            .slug_resolver
            .resolve(SlugScope::Category, title.as_str(), None)
            .await?;

        let category = self
            .repo
            .insert(NewCategory {
                title,
                slug,
                created_date: self.clock.today(),
            })
            .await?;
        tracing::info!(category_id = category.id.0, slug = %category.slug, "category created");
        Ok(category.into())
    }
}
