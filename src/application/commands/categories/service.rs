use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{category::CategoryRepository, slug::SlugResolver},
};

pub struct CategoryCommandService {
    pub(super) repo: Arc<dyn CategoryRepository>,
    pub(super) slug_resolver: Arc<SlugResolver>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CategoryCommandService {
    pub fn new(
        repo: Arc<dyn CategoryRepository>,
        slug_resolver: Arc<SlugResolver>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            slug_resolver,
            clock,
        }
    }
}
