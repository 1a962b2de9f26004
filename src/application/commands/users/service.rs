use std::sync::Arc;

use crate::application::ports::{
    notify::AccountNotifier,
    security::{ActivationTokenService, PasswordHasher, TokenManager},
    session_revocation::SessionRevocationStore,
    time::Clock,
};
use crate::domain::user::UserRepository;

/// Deployment-specific values the account flows need.
#[derive(Debug, Clone)]
pub struct AccountSettings {
    /// Origin activation links are built on, without a trailing slash.
    pub public_base_url: String,
    /// Where a successful activation sends the browser, if anywhere.
    pub activation_redirect_url: Option<String>,
}

impl Default for AccountSettings {
    fn default() -> Self {
        Self {
            public_base_url: "http://localhost:8080".into(),
            activation_redirect_url: None,
        }
    }
}

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) activation_tokens: Arc<dyn ActivationTokenService>,
    pub(super) notifier: Arc<dyn AccountNotifier>,
    pub(super) session_revocation_store: Arc<dyn SessionRevocationStore>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) settings: AccountSettings,
}

impl UserCommandService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        activation_tokens: Arc<dyn ActivationTokenService>,
        notifier: Arc<dyn AccountNotifier>,
        session_revocation_store: Arc<dyn SessionRevocationStore>,
        clock: Arc<dyn Clock>,
        settings: AccountSettings,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            token_manager,
            activation_tokens,
            notifier,
            session_revocation_store,
            clock,
            settings,
        }
    }

    pub fn activation_redirect_url(&self) -> Option<&str> {
        self.settings.activation_redirect_url.as_deref()
    }
}
