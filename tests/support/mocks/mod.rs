// tests/support/mocks/mod.rs
//! Test doubles shared by the integration test binaries.
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod profile_repo;
pub mod security;
pub mod time;
pub mod util;

pub use profile_repo::{FailingProfileRepo, InMemoryProfileRepo};
pub use security::{EXPIRED_TOKEN, StaticPrincipalResolver, U1_TOKEN, U2_TOKEN, U3_TOKEN};
pub use time::fixed_now;
pub use util::DummyClock;
