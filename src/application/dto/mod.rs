pub mod auth;
pub mod profiles;

pub use auth::Principal;
pub use profiles::ProfileDto;
