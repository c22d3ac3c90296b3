// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::profiles::ProfileCommandService,
        ports::{security::PrincipalResolver, time::Clock},
        queries::profiles::ProfileQueryService,
    },
    domain::profile::ProfileRepository,
};

pub struct ApplicationServices {
    pub profile_commands: Arc<ProfileCommandService>,
    pub profile_queries: Arc<ProfileQueryService>,
    principal_resolver: Arc<dyn PrincipalResolver>,
}

impl ApplicationServices {
    pub fn new(
        profile_repo: Arc<dyn ProfileRepository>,
        principal_resolver: Arc<dyn PrincipalResolver>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let profile_commands = Arc::new(ProfileCommandService::new(
            Arc::clone(&profile_repo),
            Arc::clone(&clock),
        ));
        let profile_queries = Arc::new(ProfileQueryService::new(Arc::clone(&profile_repo)));

        Self {
            profile_commands,
            profile_queries,
            principal_resolver,
        }
    }

    pub fn principal_resolver(&self) -> Arc<dyn PrincipalResolver> {
        Arc::clone(&self.principal_resolver)
    }
}
