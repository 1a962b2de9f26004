// tests/support/mocks/notify.rs
use async_trait::async_trait;
use recipe_core::application::{ApplicationResult, ports::notify::AccountNotifier};
use recipe_core::domain::user::User;
use std::sync::Mutex;

/// Records every activation link instead of sending mail.
#[derive(Debug, Default)]
pub struct CapturingNotifier {
    sent: Mutex<Vec<(String, String)>>,
}

impl CapturingNotifier {
    /// Most recent link sent to `username`.
    pub fn link_for(&self, username: &str) -> Option<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(user, _)| user == username)
            .map(|(_, link)| link.clone())
    }

    /// `(uid, token)` path segments of the most recent link for `username`.
    pub fn activation_parts(&self, username: &str) -> Option<(String, String)> {
        let link = self.link_for(username)?;
        let tail = link.split("/api/v1/auth/activate/").nth(1)?;
        let (uid, token) = tail.split_once('/')?;
        Some((uid.to_string(), token.to_string()))
    }

    pub fn count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl AccountNotifier for CapturingNotifier {
    async fn send_activation(&self, user: &User, link: &str) -> ApplicationResult<()> {
        self.sent
            .lock()
            .unwrap()
            .push((user.username.to_string(), link.to_string()));
        Ok(())
    }
}
