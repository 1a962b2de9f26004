use super::UserCommandService;
use crate::{
    application::{
        dto::{SessionDto, TokenSubject},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{User, Username},
};
use uuid::Uuid;

pub struct LoginUserCommand {
    pub username: String,
    pub password: String,
}

impl UserCommandService {
    /// Verifies credentials and opens a new session.
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<SessionDto> {
        let username = Username::new(command.username)
            .map_err(|_| ApplicationError::unauthorized("invalid credentials"))?;
        let user = self
            .find_and_authenticate_user(&username, &command.password)
            .await?;

        let subject = TokenSubject {
            user_id: user.id,
            username: user.username.to_string(),
            role: user.role,
            capabilities: user.role.default_capabilities(),
            session_id: Some(Uuid::new_v4().to_string()),
        };
        let token = self.token_manager.issue(subject).await?;
        tracing::info!(user_id = user.id.0, "user logged in");

        Ok(SessionDto {
            token: token.token,
            username: user.username.into(),
            expires_at: token.expires_at,
            expires_in: token.expires_in,
        })
    }

    async fn find_and_authenticate_user(
        &self,
        username: &Username,
        password: &str,
    ) -> ApplicationResult<User> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid credentials"))?;

        self.password_hasher
            .verify(password, user.password_hash.as_str())
            .await?;

        if !user.is_active {
            return Err(ApplicationError::inactive_account(user.username.as_str()));
        }

        Ok(user)
    }
}
