// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of "now" for server-managed timestamps such as `Profile::updated_at`.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
