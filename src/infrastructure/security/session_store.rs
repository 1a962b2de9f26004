use crate::application::ports::session_revocation::SessionRevocationStore;
use crate::application::{ApplicationError, ApplicationResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Process-local revocation list used when no Redis URL is configured.
#[derive(Default)]
pub struct InMemorySessionRevocationStore {
    revoked: Mutex<HashMap<String, Instant>>,
}

impl InMemorySessionRevocationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> ApplicationError {
    ApplicationError::infrastructure("session store lock poisoned")
}

#[async_trait]
impl SessionRevocationStore for InMemorySessionRevocationStore {
    async fn is_revoked(&self, session_id: &str) -> ApplicationResult<bool> {
        let guard = self.revoked.lock().map_err(poisoned)?;
        Ok(guard
            .get(session_id)
            .is_some_and(|until| *until > Instant::now()))
    }

    async fn revoke(&self, session_id: &str, ttl: Duration) -> ApplicationResult<()> {
        let mut guard = self.revoked.lock().map_err(poisoned)?;
        let now = Instant::now();
        guard.retain(|_, until| *until > now);
        guard.insert(session_id.to_string(), now + ttl);
        Ok(())
    }
}
