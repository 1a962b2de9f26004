use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, NewUser, PasswordHash, PersonName, Role, User, Username},
};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};

pub struct RegisterUserCommand {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl UserCommandService {
    /// Creates an inactive account and sends its activation link.
    ///
    /// The first account ever registered is made an administrator by the
    /// repository.
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        if command.password != command.confirm_password {
            return Err(ApplicationError::validation("passwords do not match"));
        }
        let username = Username::new(command.username)?;
        let email = Email::new(command.email)?;
        let first_name = PersonName::new(command.first_name)?;
        let last_name = PersonName::new(command.last_name)?;
        validate_password(&command.password)?;

        self.ensure_email_available(&email).await?;
        self.ensure_username_available(&username).await?;

        let hashed = self.password_hasher.hash(&command.password).await?;
        let new_user = NewUser::pending(
            username,
            email,
            first_name,
            last_name,
            PasswordHash::new(hashed)?,
            Role::Member,
            self.clock.now(),
        );
        let user = self.user_repo.insert(new_user).await?;

        let link = self.activation_link(&user)?;
        self.notifier.send_activation(&user, &link).await?;
        tracing::info!(user_id = user.id.0, role = %user.role, "account registered");

        Ok(user.into())
    }

    pub(super) async fn ensure_email_available(&self, email: &Email) -> ApplicationResult<()> {
        if self.user_repo.find_by_email(email).await?.is_some() {
            return Err(ApplicationError::conflict("email is already in use"));
        }
        Ok(())
    }

    pub(super) async fn ensure_username_available(
        &self,
        username: &Username,
    ) -> ApplicationResult<()> {
        if self.user_repo.find_by_username(username).await?.is_some() {
            return Err(ApplicationError::conflict("username already exists"));
        }
        Ok(())
    }

    fn activation_link(&self, user: &User) -> ApplicationResult<String> {
        let uid = encode_uid(user.id.0);
        let token = self.activation_tokens.issue(user, self.clock.now())?;
        Ok(format!(
            "{}/api/v1/auth/activate/{uid}/{token}",
            self.settings.public_base_url.trim_end_matches('/')
        ))
    }
}

pub(super) fn encode_uid(id: i64) -> String {
    URL_SAFE_NO_PAD.encode(id.to_string())
}

pub(super) fn decode_uid(uid: &str) -> Option<i64> {
    let bytes = URL_SAFE_NO_PAD.decode(uid).ok()?;
    std::str::from_utf8(&bytes).ok()?.parse().ok()
}
