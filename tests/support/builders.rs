// tests/support/builders.rs
use profile_service::domain::profile::{Profile, ProfileDetails, ProfileId};
use profile_service::domain::user::UserId;

use super::mocks::fixed_now;

pub struct ProfileBuilder {
    id: String,
    owner_id: String,
    details: ProfileDetails,
}

impl ProfileBuilder {
    pub fn new() -> Self {
        Self {
            id: "42".into(),
            owner_id: "u1".into(),
            details: ProfileDetails {
                first_name: Some("Ada".into()),
                last_name: Some("Lovelace".into()),
                hobbies: Some("mathematics".into()),
                ..ProfileDetails::default()
            },
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn owner(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = owner_id.into();
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.details.first_name = Some(first_name.into());
        self
    }

    pub fn build(self) -> Profile {
        Profile {
            id: ProfileId::new(self.id).unwrap(),
            owner_id: UserId::new(self.owner_id).unwrap(),
            details: self.details,
            updated_at: fixed_now(),
        }
    }
}
