use super::ProfileQueryService;
use crate::{
    application::{
        dto::ProfileDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::UserRef,
};

impl ProfileQueryService {
    /// Look up the profile owned by `user`. Works the same for an explicit
    /// author id and for the authenticated caller.
    pub async fn find_users_profile(&self, user: &UserRef) -> ApplicationResult<ProfileDto> {
        let profile = self
            .profile_repo
            .find_by_owner(&user.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("profile not found"))?;
        Ok(profile.into())
    }
}
