use std::sync::Arc;

use crate::domain::profile::ProfileRepository;

pub struct ProfileQueryService {
    pub(super) profile_repo: Arc<dyn ProfileRepository>,
}

impl ProfileQueryService {
    pub fn new(profile_repo: Arc<dyn ProfileRepository>) -> Self {
        Self { profile_repo }
    }
}
