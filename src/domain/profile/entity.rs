// src/domain/profile/entity.rs
use crate::domain::profile::value_objects::ProfileId;
use crate::domain::user::UserId;
use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone)]
pub struct Profile {
    pub id: ProfileId,
    pub owner_id: UserId,
    pub details: ProfileDetails,
    pub updated_at: DateTime<Utc>,
}

/// The user-editable part of a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDetails {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub hobbies: Option<String>,
    pub location: Option<String>,
    pub about_me: Option<String>,
    pub profile_img: Option<String>,
    pub header_img: Option<String>,
}

impl Profile {
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.owner_id == user_id
    }

    /// Replace every editable attribute. Id and owner never change.
    pub fn apply_details(&mut self, details: ProfileDetails, now: DateTime<Utc>) {
        self.details = details;
        self.updated_at = now;
    }
}
