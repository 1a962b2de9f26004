// src/infrastructure/security/redis_session_store.rs
use crate::application::ApplicationResult;
use crate::application::error::ApplicationError;
use crate::application::ports::session_revocation::SessionRevocationStore;
use async_trait::async_trait;
use deadpool_redis::{Config as DeadpoolConfig, Connection, Pool, Runtime};
use redis::AsyncCommands;
use std::time::Duration;

const KEY_PREFIX: &str = "recipes:revoked:session:";

/// Revocation list shared by every instance through Redis. Entries expire
/// together with the tokens that reference them.
#[derive(Clone)]
pub struct RedisSessionRevocationStore {
    pool: Pool,
}

impl RedisSessionRevocationStore {
    /// Create a new Redis backed session store from a redis URL (e.g. redis://:password@host:6379/0)
    pub fn from_url(url: &str) -> Result<Self, ApplicationError> {
        let cfg = DeadpoolConfig::from_url(url);
        let pool = cfg
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(Self { pool })
    }

    async fn connection(&self) -> ApplicationResult<Connection> {
        self.pool
            .get()
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }
}

fn key_for(session_id: &str) -> String {
    format!("{KEY_PREFIX}{session_id}")
}

#[async_trait]
impl SessionRevocationStore for RedisSessionRevocationStore {
    async fn is_revoked(&self, session_id: &str) -> ApplicationResult<bool> {
        let mut conn = self.connection().await?;
        conn.exists(key_for(session_id))
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }

    async fn revoke(&self, session_id: &str, ttl: Duration) -> ApplicationResult<()> {
        let mut conn = self.connection().await?;
        conn.set_ex::<_, _, ()>(key_for(session_id), 1, ttl.as_secs().max(1))
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }
}
