use std::sync::Arc;

use crate::{application::ports::time::Clock, domain::profile::ProfileRepository};

pub struct ProfileCommandService {
    pub(super) profile_repo: Arc<dyn ProfileRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ProfileCommandService {
    pub fn new(profile_repo: Arc<dyn ProfileRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            profile_repo,
            clock,
        }
    }
}
