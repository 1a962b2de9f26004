use std::time::Duration;

use crate::application::ApplicationResult;
use async_trait::async_trait;

#[async_trait]
pub trait SessionRevocationStore: Send + Sync {
    /// Return true if the given session id has been revoked.
    async fn is_revoked(&self, session_id: &str) -> ApplicationResult<bool>;

    /// Revoke the given session id (e.g. on logout). The entry only needs to
    /// outlive the tokens that carry it, so stores may drop it after `ttl`.
    async fn revoke(&self, session_id: &str, ttl: Duration) -> ApplicationResult<()>;
}
