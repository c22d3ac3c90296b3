// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_profile;

pub use error::map_sqlx;
pub use postgres_profile::PostgresProfileRepository;
