use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::{AuthenticatedUser, UserProfileDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, PasswordHash, PersonName, UserUpdate, Username},
};

#[derive(Default)]
pub struct UpdateProfileCommand {
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UserCommandService {
    /// Partially updates the caller's own account.
    pub async fn update_profile(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateProfileCommand,
    ) -> ApplicationResult<UserProfileDto> {
        let current = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let mut update = UserUpdate::new(actor.id);

        if let Some(username) = command.username {
            let username = Username::new(username)?;
            if username != current.username {
                self.ensure_username_available(&username).await?;
                update = update.with_username(username);
            }
        }

        if let Some(email) = command.email {
            let email = Email::new(email)?;
            if email != current.email {
                self.ensure_email_available(&email).await?;
                update = update.with_email(email);
            }
        }

        if let Some(first_name) = command.first_name {
            update = update.with_first_name(PersonName::new(first_name)?);
        }

        if let Some(last_name) = command.last_name {
            update = update.with_last_name(PersonName::new(last_name)?);
        }

        if let Some(password) = command.password {
            validate_password(&password)?;
            let hashed = self.password_hasher.hash(&password).await?;
            update = update.with_password_hash(PasswordHash::new(hashed)?);
        }

        if update.is_empty() {
            return Ok(UserProfileDto::from_user(current));
        }

        let user = self.user_repo.update(update).await?;
        Ok(UserProfileDto::from_user(user))
    }
}
