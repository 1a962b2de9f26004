use std::sync::Arc;

use super::RecipeAssembler;
use crate::domain::recipe::RecipeReadRepository;

pub struct RecipeQueryService {
    pub(super) read_repo: Arc<dyn RecipeReadRepository>,
    pub(super) assembler: Arc<RecipeAssembler>,
}

impl RecipeQueryService {
    pub fn new(read_repo: Arc<dyn RecipeReadRepository>, assembler: Arc<RecipeAssembler>) -> Self {
        Self {
            read_repo,
            assembler,
        }
    }
}
