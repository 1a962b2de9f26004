// src/infrastructure/security/activation.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::security::ActivationTokenService,
};
use crate::domain::user::User;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// How long an activation link stays valid.
pub const ACTIVATION_TTL_DAYS: i64 = 3;

/// HMAC-SHA256 activation tokens of the form `<issued-at hex>-<mac>`.
///
/// The MAC covers the user id, password hash, active flag and issue time, so a
/// token stops verifying once the account is activated.
pub struct HmacActivationTokens {
    secret: Vec<u8>,
    ttl: Duration,
}

impl HmacActivationTokens {
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
            ttl: Duration::days(ACTIVATION_TTL_DAYS),
        }
    }

    fn mac(&self, user: &User, issued: i64) -> ApplicationResult<HmacSha256> {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        mac.update(
            format!(
                "{}:{}:{}:{issued}",
                user.id.0,
                user.password_hash.as_str(),
                user.is_active
            )
            .as_bytes(),
        );
        Ok(mac)
    }
}

impl ActivationTokenService for HmacActivationTokens {
    fn issue(&self, user: &User, now: DateTime<Utc>) -> ApplicationResult<String> {
        let issued = now.timestamp();
        let tag = self.mac(user, issued)?.finalize().into_bytes();
        Ok(format!("{issued:x}-{}", URL_SAFE_NO_PAD.encode(tag)))
    }

    fn verify(&self, user: &User, token: &str, now: DateTime<Utc>) -> bool {
        let Some((issued_hex, tag)) = token.split_once('-') else {
            return false;
        };
        let Ok(issued) = i64::from_str_radix(issued_hex, 16) else {
            return false;
        };
        let Some(issued_at) = DateTime::<Utc>::from_timestamp(issued, 0) else {
            return false;
        };
        if now < issued_at || now - issued_at > self.ttl {
            return false;
        }
        let Ok(tag) = URL_SAFE_NO_PAD.decode(tag) else {
            return false;
        };
        match self.mac(user, issued) {
            Ok(mac) => mac.verify_slice(&tag).is_ok(),
            Err(_) => false,
        }
    }
}
