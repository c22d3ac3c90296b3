// src/domain/profile/mod.rs
pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{Profile, ProfileDetails};
pub use repository::ProfileRepository;
pub use specifications::IsProfileOwnerSpec;
pub use value_objects::ProfileId;
