// tests/support/mocks/profile_repo.rs
use async_trait::async_trait;
use profile_service::domain::errors::{DomainError, DomainResult};
use profile_service::domain::profile::{Profile, ProfileId, ProfileRepository};
use profile_service::domain::user::UserId;
use std::collections::HashMap;
use std::sync::Mutex;

/// Profiles keyed by id, guarded by a mutex so tests can inspect state after
/// a request.
#[derive(Default)]
pub struct InMemoryProfileRepo {
    inner: Mutex<HashMap<String, Profile>>,
}

impl InMemoryProfileRepo {
    pub fn with_profiles(profiles: impl IntoIterator<Item = Profile>) -> Self {
        let map = profiles
            .into_iter()
            .map(|p| (p.id.as_str().to_string(), p))
            .collect();
        Self {
            inner: Mutex::new(map),
        }
    }

    pub fn get(&self, id: &str) -> Option<Profile> {
        self.inner.lock().unwrap().get(id).cloned()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepo {
    async fn find_by_id(&self, id: &ProfileId) -> DomainResult<Option<Profile>> {
        Ok(self.get(id.as_str()))
    }

    async fn find_by_owner(&self, owner_id: &UserId) -> DomainResult<Option<Profile>> {
        let map = self.inner.lock().unwrap();
        Ok(map.values().find(|p| &p.owner_id == owner_id).cloned())
    }

    async fn update(&self, profile: &Profile) -> DomainResult<Profile> {
        let mut map = self.inner.lock().unwrap();
        let slot = map
            .get_mut(profile.id.as_str())
            .ok_or_else(|| DomainError::NotFound("profile not found".into()))?;
        *slot = profile.clone();
        Ok(slot.clone())
    }
}

/// Every call fails as if the database were unreachable.
pub struct FailingProfileRepo;

#[async_trait]
impl ProfileRepository for FailingProfileRepo {
    async fn find_by_id(&self, _id: &ProfileId) -> DomainResult<Option<Profile>> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn find_by_owner(&self, _owner_id: &UserId) -> DomainResult<Option<Profile>> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn update(&self, _profile: &Profile) -> DomainResult<Profile> {
        Err(DomainError::Persistence("connection refused".into()))
    }
}
