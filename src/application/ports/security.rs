use crate::application::{ApplicationResult, dto::Principal};
use async_trait::async_trait;

/// Turns a bearer credential issued by the external identity provider into
/// an authenticated principal. Implementations must reject anything they
/// cannot verify with `ApplicationError::Unauthorized`.
#[async_trait]
pub trait PrincipalResolver: Send + Sync {
    async fn authenticate(&self, token: &str) -> ApplicationResult<Principal>;
}
