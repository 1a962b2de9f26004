use crate::application::ApplicationResult;
use crate::domain::user::User;
use async_trait::async_trait;

#[async_trait]
pub trait AccountNotifier: Send + Sync {
    /// Deliver the activation link for a freshly registered account.
    async fn send_activation(&self, user: &User, link: &str) -> ApplicationResult<()>;
}
