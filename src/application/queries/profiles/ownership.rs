use super::ProfileQueryService;
use crate::{
    application::{
        dto::Principal,
        error::{ApplicationError, ApplicationResult},
    },
    domain::profile::{IsProfileOwnerSpec, ProfileId},
};

pub struct CheckProfileOwnershipQuery {
    pub id: String,
}

impl ProfileQueryService {
    pub async fn check_profile_ownership(
        &self,
        actor: &Principal,
        query: CheckProfileOwnershipQuery,
    ) -> ApplicationResult<bool> {
        let id = ProfileId::new(query.id)?;
        let profile = self
            .profile_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("profile not found"))?;

        Ok(IsProfileOwnerSpec::new(Some(&profile), &actor.id).is_satisfied())
    }
}
