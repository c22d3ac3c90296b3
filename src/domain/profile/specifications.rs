use crate::domain::profile::entity::Profile;
use crate::domain::user::UserId;

pub struct IsProfileOwnerSpec<'a> {
    profile: Option<&'a Profile>,
    user_id: &'a UserId,
}

impl<'a> IsProfileOwnerSpec<'a> {
    pub fn new(profile: Option<&'a Profile>, user_id: &'a UserId) -> Self {
        Self { profile, user_id }
    }

    /// A missing profile has no owner, so nobody satisfies it.
    pub fn is_satisfied(&self) -> bool {
        self.profile
            .is_some_and(|profile| profile.is_owned_by(self.user_id))
    }
}
