use crate::domain::user::{UserId, UserRef};
use chrono::{DateTime, Utc};

/// The caller identity resolved from a verified bearer token. Handlers only
/// ever receive one of these from the principal middleware, never from a
/// request body.
#[derive(Debug, Clone)]
pub struct Principal {
    pub id: UserId,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Principal {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            expires_at: None,
        }
    }

    pub fn as_user_ref(&self) -> UserRef {
        UserRef::new(self.id.clone())
    }
}
