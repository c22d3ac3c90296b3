mod get_by_id;
mod get_by_owner;
mod ownership;
mod service;

pub use get_by_id::GetProfileByIdQuery;
pub use ownership::CheckProfileOwnershipQuery;
pub use service::ProfileQueryService;
