use super::ProfileQueryService;
use crate::{
    application::{
        dto::ProfileDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::profile::ProfileId,
};

pub struct GetProfileByIdQuery {
    pub id: String,
}

impl ProfileQueryService {
    pub async fn find_profile_by_id(
        &self,
        query: GetProfileByIdQuery,
    ) -> ApplicationResult<ProfileDto> {
        let id = ProfileId::new(query.id)?;
        let profile = self
            .profile_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("profile not found"))?;
        Ok(profile.into())
    }
}
