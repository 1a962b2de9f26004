// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::{Capability, Role, UserId};
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::time::{Duration, UNIX_EPOCH};

/// Rebuilds the caller identity from the facts of a verified token.
pub fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<AuthenticatedUser> {
    let mut ctx = ClaimsContext::default();
    for fact in facts {
        ctx.apply(&fact.predicate);
    }
    ctx.into_user()
}

#[derive(Default)]
struct ClaimsContext {
    user: Option<(i64, String)>,
    role: Option<Role>,
    issued_at: Option<DateTime<Utc>>,
    expires_at: Option<DateTime<Utc>>,
    session_id: Option<String>,
    capabilities: HashSet<Capability>,
}

fn as_str(term: &Term) -> Option<&str> {
    match term {
        Term::Str(value) => Some(value.as_str()),
        _ => None,
    }
}

fn as_date(term: &Term) -> Option<DateTime<Utc>> {
    match term {
        Term::Date(seconds) => Some(DateTime::<Utc>::from(UNIX_EPOCH + Duration::from_secs(*seconds))),
        _ => None,
    }
}

impl ClaimsContext {
    fn apply(&mut self, predicate: &Predicate) {
        let terms = predicate.terms.as_slice();
        match (predicate.name.as_str(), terms) {
            ("user", [Term::Integer(id), name]) => {
                if let Some(name) = as_str(name) {
                    self.user = Some((*id, name.to_string()));
                }
            }
            ("role", [role]) => {
                self.role = as_str(role).and_then(|r| r.parse().ok());
            }
            ("issued_at", [at]) => self.issued_at = as_date(at),
            ("expires_at", [at]) => self.expires_at = as_date(at),
            ("session", [sid]) => self.session_id = as_str(sid).map(str::to_string),
            ("right", [resource, action]) => {
                if let (Some(resource), Some(action)) = (as_str(resource), as_str(action)) {
                    self.capabilities.insert(Capability::new(resource, action));
                }
            }
            _ => {}
        }
    }

    fn into_user(self) -> ApplicationResult<AuthenticatedUser> {
        let (id, username) = self
            .user
            .ok_or_else(|| ApplicationError::unauthorized("missing user claim"))?;
        let role = self
            .role
            .ok_or_else(|| ApplicationError::unauthorized("missing role claim"))?;
        let issued_at = self
            .issued_at
            .ok_or_else(|| ApplicationError::unauthorized("missing issued_at claim"))?;
        let expires_at = self
            .expires_at
            .ok_or_else(|| ApplicationError::unauthorized("missing expires_at claim"))?;
        let id = UserId::new(id).map_err(|_| ApplicationError::unauthorized("invalid user claim"))?;

        Ok(AuthenticatedUser {
            id,
            username,
            role,
            capabilities: self.capabilities,
            issued_at,
            expires_at,
            session_id: self.session_id,
        })
    }
}
