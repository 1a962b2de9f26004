use std::time::Duration;

use super::UserCommandService;
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};

impl UserCommandService {
    /// Revokes the caller's session so its token is rejected from now on.
    pub async fn logout(&self, actor: &AuthenticatedUser) -> ApplicationResult<()> {
        let session_id = actor
            .session_id
            .as_deref()
            .ok_or_else(|| ApplicationError::validation("token has no session"))?;

        let remaining = actor
            .expires_at
            .signed_duration_since(self.clock.now())
            .num_seconds()
            .max(1);
        self.session_revocation_store
            .revoke(session_id, Duration::from_secs(remaining.unsigned_abs()))
            .await?;
        tracing::info!(user_id = actor.id.0, "session revoked");
        Ok(())
    }
}
