use crate::domain::profile::{Profile, ProfileDetails};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire representation of a profile. Also accepted as the update payload, in
/// which case `ownerId` and `updatedAt` are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
    #[serde(default)]
    pub hobbies: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub about_me: Option<String>,
    #[serde(default)]
    pub profile_img: Option<String>,
    #[serde(default)]
    pub header_img: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ProfileDto {
    pub fn details(&self) -> ProfileDetails {
        ProfileDetails {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            birthday: self.birthday,
            hobbies: self.hobbies.clone(),
            location: self.location.clone(),
            about_me: self.about_me.clone(),
            profile_img: self.profile_img.clone(),
            header_img: self.header_img.clone(),
        }
    }
}

impl From<Profile> for ProfileDto {
    fn from(profile: Profile) -> Self {
        let ProfileDetails {
            first_name,
            last_name,
            birthday,
            hobbies,
            location,
            about_me,
            profile_img,
            header_img,
        } = profile.details;

        Self {
            id: profile.id.into(),
            owner_id: Some(profile.owner_id.into()),
            first_name,
            last_name,
            birthday,
            hobbies,
            location,
            about_me,
            profile_img,
            header_img,
            updated_at: Some(profile.updated_at),
        }
    }
}
