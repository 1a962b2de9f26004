use super::{UserCommandService, register::decode_uid};
use crate::{
    application::{
        dto::ActivationDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{UserId, UserUpdate},
};

pub struct ActivateAccountCommand {
    pub uid: String,
    pub token: String,
}

const INVALID_LINK: &str = "activation link is invalid";

impl UserCommandService {
    pub async fn activate(&self, command: ActivateAccountCommand) -> ApplicationResult<ActivationDto> {
        let user_id = decode_uid(&command.uid)
            .and_then(|id| UserId::new(id).ok())
            .ok_or_else(|| ApplicationError::validation(INVALID_LINK))?;

        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApplicationError::validation(INVALID_LINK))?;

        if user.is_active
            || !self
                .activation_tokens
                .verify(&user, &command.token, self.clock.now())
        {
            return Err(ApplicationError::validation(INVALID_LINK));
        }

        let user = self
            .user_repo
            .update(UserUpdate::new(user_id).with_is_active(true))
            .await
            .map_err(ApplicationError::from)
            .map_err(|err| {
                if err.is_not_found() {
                    ApplicationError::validation(INVALID_LINK)
                } else {
                    err
                }
            })?;
        tracing::info!(user_id = user.id.0, "account activated");

        Ok(ActivationDto {
            username: user.username.into(),
            detail: "account activated".into(),
        })
    }
}
