// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use recipe_core::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use std::collections::HashMap;
use std::sync::Mutex;

use super::time::fixed_now;

/// Issues opaque `token-<n>` strings and remembers who they belong to.
#[derive(Debug, Default)]
pub struct TestTokenManager {
    issued: Mutex<HashMap<String, AuthenticatedUser>>,
}

#[async_trait]
impl TokenManager for TestTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = fixed_now();
        let expires_at = issued_at + Duration::hours(1);
        let mut issued = self.issued.lock().unwrap();
        let token = format!("token-{}", issued.len() + 1);

        issued.insert(
            token.clone(),
            AuthenticatedUser {
                id: subject.user_id,
                username: subject.username,
                role: subject.role,
                capabilities: subject.capabilities,
                issued_at,
                expires_at,
                session_id: subject.session_id.clone(),
            },
        );

        Ok(AuthTokenDto {
            token,
            issued_at,
            expires_at,
            expires_in: 3600,
            session_id: subject.session_id,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.issued
            .lock()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or_else(|| ApplicationError::unauthorized("invalid token"))
    }
}

/// Hashes to `hash::<password>` and checks it exactly.
#[derive(Clone, Debug, Default)]
pub struct StrictPasswordHasher;

#[async_trait]
impl PasswordHasher for StrictPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hash::{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if format!("hash::{password}") == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}
