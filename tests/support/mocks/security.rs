// tests/support/mocks/security.rs
use async_trait::async_trait;
use profile_service::application::{
    ApplicationResult, dto::Principal, error::ApplicationError,
    ports::security::PrincipalResolver,
};
use profile_service::domain::user::UserId;

/// Bearer tokens understood by `StaticPrincipalResolver`.
pub const U1_TOKEN: &str = "token-u1";
pub const U2_TOKEN: &str = "token-u2";
/// Valid principal that owns no profile.
pub const U3_TOKEN: &str = "token-u3";
pub const EXPIRED_TOKEN: &str = "expired-token";

#[derive(Clone, Debug, Default)]
pub struct StaticPrincipalResolver;

#[async_trait]
impl PrincipalResolver for StaticPrincipalResolver {
    async fn authenticate(&self, token: &str) -> ApplicationResult<Principal> {
        let user = match token {
            U1_TOKEN => "u1",
            U2_TOKEN => "u2",
            U3_TOKEN => "u3",
            EXPIRED_TOKEN => return Err(ApplicationError::unauthorized("expired token")),
            _ => return Err(ApplicationError::unauthorized("invalid token")),
        };
        Ok(Principal::new(UserId::new(user)?))
    }
}
