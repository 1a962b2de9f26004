// src/application/ports/security.rs
use crate::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
};
use crate::domain::user::User;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()>;
}

#[async_trait]
pub trait TokenManager: Send + Sync {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto>;
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser>;
}

/// One-time tokens carried by account activation links.
///
/// A token is bound to the user's current state, so it stops verifying once
/// the account has been activated or its password changed.
pub trait ActivationTokenService: Send + Sync {
    fn issue(&self, user: &User, now: DateTime<Utc>) -> ApplicationResult<String>;
    fn verify(&self, user: &User, token: &str, now: DateTime<Utc>) -> bool;
}
