use super::RecipeQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, Page, RecipeDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::recipe::RecipeFilter,
};

pub struct ListRecipesQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

const DEFAULT_PAGE_SIZE: u32 = 2;
const MAX_PAGE_SIZE: u32 = 100;

impl RecipeQueryService {
    /// Page-number listing of every recipe, newest first.
    pub async fn list_recipes(
        &self,
        viewer: Option<&AuthenticatedUser>,
        query: ListRecipesQuery,
    ) -> ApplicationResult<Page<RecipeDto>> {
        let (page, page_size) = normalize_paging(query.page, query.page_size)?;
        let offset = u64::from(page - 1) * u64::from(page_size);

        let (recipes, total) = self
            .read_repo
            .list_page(&RecipeFilter::default(), page_size, offset)
            .await?;

        if recipes.is_empty() && page > 1 {
            return Err(ApplicationError::not_found("invalid page"));
        }

        let items = self.assembler.many(recipes, viewer).await?;
        Ok(Page::new(items, page, page_size, total))
    }
}

fn normalize_paging(page: Option<u32>, page_size: Option<u32>) -> ApplicationResult<(u32, u32)> {
    let page = page.unwrap_or(1);
    if page == 0 {
        return Err(ApplicationError::validation("page must be at least 1"));
    }
    let page_size = match page_size {
        None | Some(0) => DEFAULT_PAGE_SIZE,
        Some(size) => size.min(MAX_PAGE_SIZE),
    };
    Ok((page, page_size))
}
