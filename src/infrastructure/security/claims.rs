// src/infrastructure/security/claims.rs
use crate::application::{
    dto::Principal,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::UserId;
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, Utc};
use std::time::{Duration, UNIX_EPOCH};

pub fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<Principal> {
    let ctx = ClaimsContext::from_facts(facts);

    let user_id = ctx
        .user_id
        .ok_or_else(|| ApplicationError::unauthorized("missing user id"))?;
    let id = UserId::new(user_id).map_err(|_| ApplicationError::unauthorized("blank user id"))?;

    Ok(Principal {
        id,
        expires_at: ctx.expires_at,
    })
}

#[derive(Default)]
struct ClaimsContext {
    user_id: Option<String>,
    expires_at: Option<DateTime<Utc>>,
}

impl ClaimsContext {
    fn from_facts(facts: Vec<Fact>) -> Self {
        let mut ctx = ClaimsContext::default();
        for fact in facts {
            ctx.apply_predicate(fact.predicate);
        }
        ctx
    }

    fn apply_predicate(&mut self, predicate: Predicate) {
        match predicate.name.as_str() {
            "user" => self.handle_user(&predicate),
            "expires_at" => self.handle_expires_at(&predicate),
            _ => {}
        }
    }

    // The identity provider may encode ids as strings or integers.
    fn handle_user(&mut self, predicate: &Predicate) {
        match predicate.terms.first() {
            Some(Term::Str(id)) => self.user_id = Some(id.clone()),
            Some(Term::Integer(id)) => self.user_id = Some(id.to_string()),
            _ => {}
        }
    }

    fn handle_expires_at(&mut self, predicate: &Predicate) {
        if let Some(Term::Date(seconds)) = predicate.terms.first() {
            let at = UNIX_EPOCH + Duration::from_secs(*seconds);
            self.expires_at = Some(DateTime::<Utc>::from(at));
        }
    }
}
