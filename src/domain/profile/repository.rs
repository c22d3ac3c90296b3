use crate::domain::errors::DomainResult;
use crate::domain::profile::{entity::Profile, value_objects::ProfileId};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_by_id(&self, id: &ProfileId) -> DomainResult<Option<Profile>>;

    async fn find_by_owner(&self, owner_id: &UserId) -> DomainResult<Option<Profile>>;

    /// Persist the editable attributes of an existing profile and return the
    /// stored row. Fails with `NotFound` if the row vanished in between.
    async fn update(&self, profile: &Profile) -> DomainResult<Profile>;
}
