use crate::application::{ApplicationResult, ports::notify::AccountNotifier};
use crate::domain::user::User;
use async_trait::async_trait;

/// Writes activation links to the log instead of sending mail.
#[derive(Default, Clone)]
pub struct LoggingNotifier;

#[async_trait]
impl AccountNotifier for LoggingNotifier {
    async fn send_activation(&self, user: &User, link: &str) -> ApplicationResult<()> {
        tracing::info!(
            user_id = user.id.0,
            email = %user.email,
            link,
            "activation link issued"
        );
        Ok(())
    }
}
