// src/infrastructure/repositories/postgres_profile.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::profile::{Profile, ProfileDetails, ProfileId, ProfileRepository};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};

const PROFILE_COLUMNS: &str = "id, owner_id, first_name, last_name, birthday, hobbies, \
     location, about_me, profile_img, header_img, updated_at";

#[derive(Clone)]
pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProfileRow {
    id: String,
    owner_id: String,
    first_name: Option<String>,
    last_name: Option<String>,
    birthday: Option<NaiveDate>,
    hobbies: Option<String>,
    location: Option<String>,
    about_me: Option<String>,
    profile_img: Option<String>,
    header_img: Option<String>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProfileRow> for Profile {
    type Error = DomainError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        Ok(Profile {
            id: ProfileId::new(row.id)?,
            owner_id: UserId::new(row.owner_id)?,
            details: ProfileDetails {
                first_name: row.first_name,
                last_name: row.last_name,
                birthday: row.birthday,
                hobbies: row.hobbies,
                location: row.location,
                about_me: row.about_me,
                profile_img: row.profile_img,
                header_img: row.header_img,
            },
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn find_by_id(&self, id: &ProfileId) -> DomainResult<Option<Profile>> {
        let sql = format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = $1");
        let row = sqlx::query_as::<_, ProfileRow>(&sql)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Profile::try_from).transpose()
    }

    async fn find_by_owner(&self, owner_id: &UserId) -> DomainResult<Option<Profile>> {
        let sql = format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE owner_id = $1");
        let row = sqlx::query_as::<_, ProfileRow>(&sql)
            .bind(owner_id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Profile::try_from).transpose()
    }

    async fn update(&self, profile: &Profile) -> DomainResult<Profile> {
        let details = &profile.details;
        let sql = format!(
            "UPDATE profiles
             SET first_name = $2, last_name = $3, birthday = $4, hobbies = $5,
                 location = $6, about_me = $7, profile_img = $8, header_img = $9,
                 updated_at = $10
             WHERE id = $1
             RETURNING {PROFILE_COLUMNS}"
        );

        let row = sqlx::query_as::<_, ProfileRow>(&sql)
            .bind(profile.id.as_str())
            .bind(details.first_name.as_deref())
            .bind(details.last_name.as_deref())
            .bind(details.birthday)
            .bind(details.hobbies.as_deref())
            .bind(details.location.as_deref())
            .bind(details.about_me.as_deref())
            .bind(details.profile_img.as_deref())
            .bind(details.header_img.as_deref())
            .bind(profile.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Profile::try_from(row)
    }
}
