use crate::domain::errors::DomainResult;
use crate::domain::slug::SlugScope;
use async_trait::async_trait;

#[async_trait]
pub trait SlugLookup: Send + Sync {
    /// Returns true when any existing slug in `scope` contains `candidate`
    /// (case-insensitive), ignoring the row whose primary key is `exclude_id`.
    async fn contains_match(
        &self,
        scope: SlugScope,
        candidate: &str,
        exclude_id: Option<i64>,
    ) -> DomainResult<bool>;
}
