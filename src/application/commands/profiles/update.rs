use super::ProfileCommandService;
use crate::{
    application::{
        dto::{Principal, ProfileDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        profile::{IsProfileOwnerSpec, ProfileDetails, ProfileId},
    },
};

pub struct UpdateProfileCommand {
    pub id: String,
    pub details: ProfileDetails,
}

impl From<ProfileDto> for UpdateProfileCommand {
    fn from(dto: ProfileDto) -> Self {
        let details = dto.details();
        Self {
            id: dto.id,
            details,
        }
    }
}

impl ProfileCommandService {
    pub async fn update_profile(
        &self,
        actor: &Principal,
        command: UpdateProfileCommand,
    ) -> ApplicationResult<ProfileDto> {
        let id = ProfileId::new(command.id)?;
        let stored = self
            .profile_repo
            .find_by_id(&id)
            .await?
            .filter(|profile| IsProfileOwnerSpec::new(Some(profile), &actor.id).is_satisfied());

        let Some(mut profile) = stored else {
            return Err(ApplicationError::wrong_user(
                "caller does not own this profile",
            ));
        };

        profile.apply_details(command.details, self.clock.now());
        // A row removed after the ownership check is reported like any other
        // profile the caller cannot update.
        let updated = match self.profile_repo.update(&profile).await {
            Ok(updated) => updated,
            Err(DomainError::NotFound(_)) => {
                return Err(ApplicationError::wrong_user("profile no longer exists"));
            }
            Err(err) => return Err(err.into()),
        };

        tracing::info!(profile_id = %updated.id, owner_id = %updated.owner_id, "profile updated");
        Ok(updated.into())
    }
}
